//! Static assets inlined into the editor page, plus HTML escaping.

use maud::PreEscaped;

/// Inline CSS for the editor page.
///
/// Full-height layout: header bar, a text area filling the rest of the
/// viewport, and a status footer. Print media shows only the note text.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--primary:#4a6fa5;--secondary:#6383b5;--bg:#f8f9fa;--fg:#212529;--muted:#888;--border:#dfe3e8;--input-bg:#fff;--shadow:rgba(0,0,0,.1);--ok:#4caf50;--pending:#ffc107;--err:#f44336;--header-h:60px;--footer-h:40px;--sans:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Oxygen,Ubuntu,Cantarell,"Open Sans","Helvetica Neue",sans-serif}
body{font-family:var(--sans);background:var(--bg);color:var(--fg);line-height:1.6;height:100vh;overflow:hidden;transition:background-color .3s,color .3s}

.app{display:flex;flex-direction:column;height:100vh}

header{height:var(--header-h);background:var(--primary);color:#fff;display:flex;align-items:center;padding:0 20px;box-shadow:0 2px 4px var(--shadow);z-index:10}
.header-content{display:flex;justify-content:space-between;align-items:center;width:100%}
.note-id{font-size:1.2rem;font-weight:600;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.header-actions{display:flex;gap:10px}
.action-btn{background:var(--secondary);color:#fff;border:none;border-radius:4px;padding:8px 12px;cursor:pointer;font-size:14px;transition:background-color .2s}
.action-btn:hover{background:var(--primary)}

.content-area{flex:1;overflow:hidden;padding:20px;display:flex;flex-direction:column}
#content{flex:1;width:100%;padding:15px;border:1px solid var(--border);border-radius:6px;background:var(--input-bg);color:var(--fg);font-size:16px;line-height:1.6;resize:none;outline:none;box-shadow:0 1px 3px var(--shadow);transition:border-color .2s,background-color .3s,color .3s}
#content:focus{border-color:var(--primary);box-shadow:0 0 0 2px rgba(74,111,165,.2)}

footer{height:var(--footer-h);background:var(--input-bg);border-top:1px solid var(--border);display:flex;align-items:center;justify-content:space-between;padding:0 20px;font-size:14px;color:var(--muted)}
.status{display:flex;align-items:center;gap:5px}
.status-icon{width:8px;height:8px;border-radius:50%;background:var(--ok)}

#printable{display:none;white-space:pre-wrap;word-break:break-word}

@media(prefers-color-scheme:dark){
:root{--primary:#4a7cb5;--secondary:#5a8bc5;--bg:#1a1e24;--fg:#e4e6eb;--border:#3a3f48;--input-bg:#2a2e35;--shadow:rgba(0,0,0,.3)}
}

@media(max-width:768px){
header{height:auto;padding:0 15px}
.header-content{flex-direction:column;align-items:flex-start;gap:10px;padding:10px 0}
.header-actions{width:100%;justify-content:flex-end}
.action-btn{padding:6px 10px;font-size:13px}
.content-area{padding:15px}
#content{padding:12px}
footer{padding:0 15px}
}

@media print{
.app{display:none}
#printable{display:block;padding:20px;font-family:var(--sans);color:#000;background:#fff}
}
"#;

/// Inline editor script.
///
/// Saves the text area back to the page URL as `text/plain`: 500ms after the
/// last keystroke, then polling every second while idle, retrying every two
/// seconds after a failed save. A single timer drives the loop and at most
/// one save is in flight, so responses cannot land out of order.
pub const EDITOR_JS: &str = r#"
(function(){
const DEBOUNCE_MS=500,POLL_MS=1000,RETRY_MS=2000;
const textarea=document.getElementById('content');
const printable=document.getElementById('printable');
const saveStatus=document.getElementById('save-status');
const statusIcon=document.querySelector('.status-icon');
const charCount=document.getElementById('char-count');
let saved=textarea.value;
let timer=null;
let inFlight=false;

function setStatus(msg,color){saveStatus.textContent=msg;statusIcon.style.backgroundColor=color}
function updateCount(){const n=textarea.value.length;charCount.textContent=n+(n===1?' character':' characters')}
function schedule(ms){clearTimeout(timer);timer=setTimeout(upload,ms)}

function upload(){
  if(inFlight)return;
  if(saved===textarea.value){schedule(POLL_MS);return}
  const temp=textarea.value;
  const req=new XMLHttpRequest();
  inFlight=true;
  setStatus('Saving...','var(--pending)');
  req.open('POST',window.location.href,true);
  req.setRequestHeader('Content-Type','text/plain; charset=UTF-8');
  req.onload=function(){
    inFlight=false;
    if(req.status!==200){failed();return}
    saved=temp;
    setStatus('Changes saved','var(--ok)');
    schedule(DEBOUNCE_MS);
  };
  req.onerror=req.onabort=req.ontimeout=function(){inFlight=false;failed()};
  req.send(temp);
  printable.textContent=temp;
}

function failed(){setStatus('Error saving','var(--err)');schedule(RETRY_MS)}

textarea.addEventListener('input',function(){
  setStatus('Saving...','var(--pending)');
  updateCount();
  if(!inFlight)schedule(DEBOUNCE_MS);
});

document.getElementById('new-note').addEventListener('click',function(){window.location.href='/'});
document.getElementById('copy-url').addEventListener('click',function(){
  navigator.clipboard.writeText(window.location.href)
    .then(function(){setStatus('URL copied','var(--ok)')})
    .catch(function(err){setStatus('Copy failed: '+err,'var(--err)')});
});

printable.textContent=saved;
updateCount();
textarea.focus();
upload();
})();
"#;

/// Content-Security-Policy header value.
///
/// Inline styles and the inline editor script only; requests go back to
/// this origin and the page cannot be framed.
pub const CSP_HEADER: &str = "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; form-action 'self'; frame-ancestors 'none'; base-uri 'none'";

/// Escape text for inclusion in HTML element content or attribute values.
///
/// Covers `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `s` and mark it as safe to splice into a maud template.
pub fn escaped(s: &str) -> PreEscaped<String> {
    PreEscaped(escape_html(s))
}
