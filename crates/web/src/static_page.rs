//! Embedded UI page
//!
//! One static HTML document: a form posting to `/api/run-mup1cc` and a log
//! pane that pretty-prints JSON responses, falling back to raw text.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>VelocityDRIVE-SP GUI</title>
  <style>
    body{font-family:Arial,Helvetica,sans-serif;margin:2rem}
    input,select{padding:4px;margin:4px 0}
    #log{white-space:pre-wrap;background:#f5f5f5;border:1px solid #ccc;padding:8px;height:280px;overflow:auto}
  </style>
</head>
<body>
  <h1>VelocityDRIVE-SP Quick GUI</h1>

  <form id="mup1-form">
    <label>Device&nbsp;(e.g.&nbsp;/dev/ttyACM0):<br>
      <input type="text" name="device" value="/dev/ttyACM0" size="40" required>
    </label><br>

    <label>Method:<br>
      <select name="method">
        <option value="get">get</option>
        <option value="fetch">fetch</option>
        <option value="ipatch">ipatch</option>
        <option value="post">post</option>
        <option value="put">put</option>
        <option value="delete">delete</option>
      </select>
    </label><br>

    <label>YAML Input (optional):
      <input type="file" name="input_file" accept=".yaml,.yml">
    </label><br>

    <button type="submit">Run mup1cc</button>
  </form>

  <h3>Result</h3>
  <div id="log">(waiting)</div>

  <script>
    const form = document.getElementById('mup1-form');
    const log  = document.getElementById('log');

    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      log.textContent = 'Running…';

      const data = new FormData(form);
      try {
        const res = await fetch('/api/run-mup1cc', {method:'POST', body:data});
        const txt = await res.text();
        try {
          // pretty-print JSON if possible
          const js = JSON.parse(txt);
          log.textContent = JSON.stringify(js, null, 2);
        } catch { log.textContent = txt; }
      } catch (err) {
        log.textContent = 'Fetch error: ' + err;
      }
    });
  </script>
</body>
</html>
"#;
