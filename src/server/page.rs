// Static front page

use axum::response::Html;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>YouTube Downloader</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
        .container { margin-top: 20px; }
        input[type="text"] { width: 70%; padding: 10px; }
        button { padding: 10px 20px; background: #ff0000; color: white; border: none; cursor: pointer; }
        #result { margin-top: 20px; }
        .error { color: red; }
    </style>
</head>
<body>
    <h1>YouTube Downloader</h1>
    <div class="container">
        <input type="text" id="videoUrl" placeholder="Enter YouTube URL">
        <button id="infoButton">Get Info</button>
    </div>
    <div id="result"></div>

    <script>
        const result = document.getElementById('result');

        function formatDuration(seconds) {
            return new Date(seconds * 1000).toISOString().substr(11, 8);
        }

        function showError(message) {
            result.innerHTML = '';
            const p = document.createElement('p');
            p.className = 'error';
            p.textContent = 'Error: ' + message;
            result.appendChild(p);
        }

        function addLine(tag, text) {
            const el = document.createElement(tag);
            el.textContent = text;
            result.appendChild(el);
        }

        function addButton(label, href) {
            const button = document.createElement('button');
            button.textContent = label;
            button.onclick = () => { window.location.href = href; };
            result.appendChild(button);
        }

        async function getInfo() {
            const url = document.getElementById('videoUrl').value.trim();
            result.textContent = 'Loading...';

            try {
                const response = await fetch(`/info/${encodeURIComponent(url)}`);
                const data = await response.json();
                if (!response.ok) {
                    showError(data.error);
                    return;
                }

                result.innerHTML = '';
                addLine('h3', data.title);
                addLine('p', 'Duration: ' + formatDuration(data.duration));
                addLine('p', 'Video ID: ' + data.video_id);
                addLine('p', 'Formats: ' + data.formats.length);
                const id = encodeURIComponent(data.video_id);
                addButton('Download', `/download/${id}`);
                addButton('Stream', `/stream/${id}`);
            } catch (error) {
                showError(error.message);
            }
        }

        document.getElementById('infoButton').addEventListener('click', getInfo);
        document.getElementById('videoUrl').addEventListener('keydown', (e) => {
            if (e.key === 'Enter') getInfo();
        });
    </script>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
