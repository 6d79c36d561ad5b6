//! WebView-based LinkHub application using `wry` + `tao`.
//!
//! Architecture:
//! - Internal pages (public directory, category pages, admin panel) are
//!   rendered in Rust and served via the `lh://` custom protocol, so each
//!   page shows live store state; mutations reload the page.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; Rust → JS via
//!   `evaluate_script` (toasts, advisory metadata fill-in).
//! - Destructive actions (link/category delete) are confirmed in the page
//!   before the IPC message is sent, with the cascade link count shown.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::link_store::LinkStoreTrait;
use crate::services::auth_service::AuthServiceTrait;
use crate::services::url_metadata;
use crate::types::link::{LinkDraft, LinkPatch};

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

struct UiState {
    app: App,
}

const STYLES: &str = include_str!("../../resources/ui/styles.css");

/// Common page chrome: dark GitHub-style variables, shared stylesheet,
/// the `lhSend` IPC wrapper and the toast helper.
fn base_page(body: &str, extra_js: &str) -> String {
    let mut html = String::with_capacity(body.len() + extra_js.len() + STYLES.len() + 2000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(":root{--bg-canvas:#0d1117;--bg-default:#161b22;--bg-subtle:#1c2128;--fg-default:#e6edf3;--fg-muted:#7d8590;--border-default:#30363d;--border-muted:#21262d;--accent-fg:#58a6ff;--accent-emphasis:#1f6feb;--danger-emphasis:#da3633;--radius-sm:6px;--radius-md:8px;--shadow-md:0 3px 6px rgba(1,4,9,0.3);--transition-fast:120ms cubic-bezier(0.33,1,0.68,1);--transition-normal:200ms cubic-bezier(0.33,1,0.68,1);--font:-apple-system,BlinkMacSystemFont,\"Segoe UI\",\"Noto Sans\",Helvetica,Arial,sans-serif}");
    html.push_str("*{margin:0;padding:0;box-sizing:border-box}");
    html.push_str("body{font-family:var(--font);background:var(--bg-canvas);color:var(--fg-default);min-height:100vh}");
    html.push_str(STYLES);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<div id=\"toast\" class=\"toast\"></div><script>");
    html.push_str(
        "function lhSend(cmd,args){window.ipc.postMessage(JSON.stringify(Object.assign({cmd:cmd},args||{})))}\n\
         function lhToast(msg){var t=document.getElementById('toast');t.textContent=msg;t.classList.add('show');setTimeout(function(){t.classList.remove('show')},2500)}\n",
    );
    html.push_str(extra_js);
    html.push_str("</script></body></html>");
    html
}

// ─── HTML escaping / URL helpers ───

fn html_escape(s: &str) -> String {
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

fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                out.push('%');
                out.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                out.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    out
}

fn urldecode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("");
                if let Ok(v) = u8::from_str_radix(hex, 16) {
                    out.push(v);
                    i += 3;
                } else {
                    out.push(bytes[i]);
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

// ─── Pages ───

fn nav_html(is_admin: bool) -> String {
    format!(
        "<header class=\"page-header\"><div><div class=\"page-title\">Link Hub</div>\
         <div class=\"page-subtitle\">Discover amazing products and services</div></div>\
         <nav class=\"nav-links\">\
         <button class=\"btn{}\" onclick=\"lhSend('navigate',{{page:'home'}})\">Public View</button>\
         <button class=\"btn{}\" onclick=\"lhSend('navigate',{{page:'admin'}})\">Admin Panel</button>\
         </nav></header>",
        if is_admin { "" } else { " btn-primary" },
        if is_admin { " btn-primary" } else { "" },
    )
}

/// Public directory: category cards with link counts plus a free-text search.
fn public_html(app: &App) -> String {
    let counts = app.store.link_counts();
    let mut cards = String::new();
    for category in app.store.categories() {
        let count = counts.get(&category.name).copied().unwrap_or(0);
        cards.push_str(&format!(
            "<div class=\"card\" onclick=\"lhSend('navigate',{{page:'category',name:'{}'}})\">\
             <h3>{}</h3><span class=\"badge\">{} link(s)</span></div>",
            html_escape(&category.name),
            html_escape(&category.name),
            count
        ));
    }
    if cards.is_empty() {
        cards = "<div class=\"empty\">No categories yet.</div>".to_string();
    }

    let body = format!(
        "<div class=\"page\">{}\
         <div class=\"search-bar\"><input id=\"search\" class=\"search-input\" type=\"text\" placeholder=\"Search products...\"></div>\
         <div id=\"results\" class=\"card-grid\" style=\"margin-bottom:24px\"></div>\
         <div class=\"card-grid\">{}</div></div>",
        nav_html(false),
        cards
    );

    let js = r#"
var si=document.getElementById('search');
si.addEventListener('input',function(){lhSend('search',{query:si.value})});
function lhApplySearch(links){
  var r=document.getElementById('results');
  r.innerHTML='';
  links.forEach(function(l){
    var c=document.createElement('div');c.className='card';
    var h=document.createElement('h3');h.textContent=l.title;c.appendChild(h);
    if(l.description){var p=document.createElement('div');p.className='muted';p.textContent=l.description;c.appendChild(p)}
    var b=document.createElement('span');b.className='badge';b.textContent=l.category;c.appendChild(b);
    c.addEventListener('click',function(){lhSend('visit',{url:l.url})});
    r.appendChild(c);
  });
}
"#;
    base_page(&body, js)
}

/// Per-category page: ordered link cards.
fn category_html(app: &App, name: &str) -> String {
    let links = app.store.links_in_category(name);
    let mut cards = String::new();
    for link in &links {
        let image = link
            .image_url
            .as_deref()
            .map(|u| format!("<img src=\"{}\" alt=\"\">", html_escape(u)))
            .unwrap_or_default();
        let description = link
            .description
            .as_deref()
            .map(|d| format!("<div class=\"muted\">{}</div>", html_escape(d)))
            .unwrap_or_default();
        cards.push_str(&format!(
            "<div class=\"card\" onclick=\"lhSend('visit',{{url:'{}'}})\">{}<h3>{}</h3>{}</div>",
            html_escape(&link.url),
            image,
            html_escape(&link.title),
            description
        ));
    }
    if cards.is_empty() {
        cards = "<div class=\"empty\">No products available in this category yet.</div>".to_string();
    }

    let body = format!(
        "<div class=\"page\">{}\
         <div style=\"display:flex;align-items:center;justify-content:space-between;margin-bottom:20px\">\
         <button class=\"btn\" onclick=\"lhSend('navigate',{{page:'home'}})\">&larr; Back to Categories</button>\
         <div style=\"text-align:right\"><div class=\"page-title\">{}</div>\
         <div class=\"page-subtitle\">{} product(s) available</div></div></div>\
         <div class=\"card-grid\">{}</div></div>",
        nav_html(false),
        html_escape(name),
        links.len(),
        cards
    );
    base_page(&body, "")
}

/// Admin panel, or the login form when not authenticated.
fn admin_html(app: &App) -> String {
    if !app.auth.is_authenticated().unwrap_or(false) {
        let body = "<div class=\"login-box\"><h1>Admin Login</h1>\
             <div class=\"form-group\"><input id=\"password\" class=\"form-input\" type=\"password\" placeholder=\"Password\"></div>\
             <button class=\"btn btn-primary\" onclick=\"lhSend('login',{password:document.getElementById('password').value})\">Login</button>\
             <div style=\"margin-top:16px\"><button class=\"btn\" onclick=\"lhSend('navigate',{page:'home'})\">Back to public view</button></div></div>";
        let js = "document.getElementById('password').addEventListener('keydown',function(e){if(e.key==='Enter')lhSend('login',{password:e.target.value})});";
        return base_page(body, js);
    }

    let counts = app.store.link_counts();

    let mut options = String::new();
    for category in app.store.categories() {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            html_escape(&category.name),
            html_escape(&category.name)
        ));
    }

    let mut category_rows = String::new();
    for category in app.store.categories() {
        let count = counts.get(&category.name).copied().unwrap_or(0);
        category_rows.push_str(&format!(
            "<div class=\"row\"><div class=\"row-title\">{} <span class=\"badge\">{}</span></div>\
             <button class=\"btn btn-danger\" onclick=\"lhDeleteCategory('{}',{})\">Delete</button></div>",
            html_escape(&category.name),
            count,
            html_escape(&category.name),
            count
        ));
    }

    let mut link_rows = String::new();
    for link in app.store.links() {
        let link_json = serde_json::to_string(link).unwrap_or_else(|_| "{}".to_string());
        link_rows.push_str(&format!(
            "<div class=\"row\"><div class=\"row-title\">{} <span class=\"badge\">{}</span></div>\
             <div class=\"row-actions\">\
             <button class=\"btn\" onclick=\"lhSend('move_link',{{id:'{}',dir:-1}})\">&uarr;</button>\
             <button class=\"btn\" onclick=\"lhSend('move_link',{{id:'{}',dir:1}})\">&darr;</button>\
             <button class=\"btn\" onclick='lhEdit({})'>Edit</button>\
             <button class=\"btn btn-danger\" onclick=\"lhDeleteLink('{}')\">Delete</button>\
             </div></div>",
            html_escape(&link.title),
            html_escape(&link.category),
            html_escape(&link.id),
            html_escape(&link.id),
            html_escape(&link_json),
            html_escape(&link.id)
        ));
    }

    let body = format!(
        "<div class=\"page\">{}\
         <div style=\"text-align:right;margin-bottom:16px\"><button class=\"btn\" onclick=\"lhSend('logout')\">Logout</button></div>\
         <div class=\"panel\"><h2 id=\"form-title\">Add New Link</h2>\
         <div class=\"form-row\">\
         <div class=\"form-group\"><label>Title *</label><input id=\"f-title\" class=\"form-input\" placeholder=\"e.g., iPhone 15 Pro\"></div>\
         <div class=\"form-group\"><label>Category *</label><select id=\"f-category\" class=\"form-select\">{}</select></div>\
         </div>\
         <div class=\"form-group\"><label>Affiliate URL *</label><input id=\"f-url\" class=\"form-input\" placeholder=\"https://example.com/product\"></div>\
         <div class=\"form-group\"><label>Image URL</label><input id=\"f-image\" class=\"form-input\" placeholder=\"https://example.com/image.jpg\"></div>\
         <div class=\"form-group\"><label>Description</label><textarea id=\"f-description\" class=\"form-textarea\" rows=\"3\" placeholder=\"Brief description of the product...\"></textarea></div>\
         <button class=\"btn btn-primary\" onclick=\"lhSubmit()\">Save Link</button>\
         <button class=\"btn\" onclick=\"lhResetForm()\">Cancel</button></div>\
         <div class=\"panel\"><h2>Manage Categories</h2>\
         <div style=\"display:flex;gap:8px;margin-bottom:12px\">\
         <input id=\"c-name\" class=\"form-input\" placeholder=\"Enter category name\">\
         <button class=\"btn btn-primary\" onclick=\"lhSend('add_category',{{name:document.getElementById('c-name').value}})\">Add Category</button></div>\
         <div class=\"row-list\">{}</div></div>\
         <div class=\"panel\"><h2>Links</h2><div class=\"row-list\">{}</div></div></div>",
        nav_html(true),
        options,
        category_rows,
        link_rows
    );

    let js = r#"
var editingId=null;
function lhEdit(link){
  editingId=link.id;
  document.getElementById('form-title').textContent='Edit Link';
  document.getElementById('f-title').value=link.title;
  document.getElementById('f-category').value=link.category;
  document.getElementById('f-url').value=link.url;
  document.getElementById('f-image').value=link.imageUrl||'';
  document.getElementById('f-description').value=link.description||'';
  window.scrollTo(0,0);
}
function lhResetForm(){
  editingId=null;
  document.getElementById('form-title').textContent='Add New Link';
  ['f-title','f-url','f-image','f-description'].forEach(function(id){document.getElementById(id).value=''});
}
function lhSubmit(){
  var args={
    title:document.getElementById('f-title').value,
    category:document.getElementById('f-category').value,
    url:document.getElementById('f-url').value,
    imageUrl:document.getElementById('f-image').value,
    description:document.getElementById('f-description').value
  };
  if(!args.title.trim()){lhToast('Title is required');return}
  if(!args.url.trim()){lhToast('URL is required');return}
  if(editingId){args.id=editingId;lhSend('update_link',args)}else{lhSend('add_link',args)}
}
function lhDeleteLink(id){
  if(confirm('Are you sure you want to delete this link?'))lhSend('delete_link',{id:id});
}
function lhDeleteCategory(name,count){
  var msg=count>0?('This will delete the category and '+count+' link(s). Are you sure?'):'Are you sure you want to delete this category?';
  if(confirm(msg))lhSend('delete_category',{name:name});
}
// Advisory auto-fill: extract a description from a pasted product URL.
// Never overwrites text the user already typed.
document.getElementById('f-url').addEventListener('change',function(e){
  lhSend('extract_metadata',{url:e.target.value});
});
function lhApplyDescription(text){
  var d=document.getElementById('f-description');
  if(!d.value.trim())d.value=text;
}
"#;
    base_page(&body, js)
}

// ─── IPC handler ───

fn handle_ipc(state: &mut UiState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "navigate" => {
            let page = msg.get("page").and_then(|v| v.as_str()).unwrap_or("home");
            let url = match page {
                "admin" => "lh://localhost/admin".to_string(),
                "category" => {
                    let name = msg.get("name").and_then(|v| v.as_str()).unwrap_or("");
                    format!("lh://localhost/category/{}", urlencode(name))
                }
                _ => "lh://localhost/home".to_string(),
            };
            Some(UserEvent::LoadUrl(url))
        }

        "visit" => {
            let url = msg.get("url").and_then(|v| v.as_str())?;
            if url.starts_with("http://") || url.starts_with("https://") {
                Some(UserEvent::LoadUrl(url.to_string()))
            } else {
                None
            }
        }

        "search" => {
            let query = msg.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let links = state.app.store.filter_links(query, None);
            let json = serde_json::to_string(&links).unwrap_or_else(|_| "[]".to_string());
            Some(UserEvent::EvalScript(format!(
                "if(typeof lhApplySearch==='function')lhApplySearch({})",
                json
            )))
        }

        "login" => {
            let password = msg.get("password").and_then(|v| v.as_str()).unwrap_or("");
            match state.app.auth.login(password) {
                Ok(true) => Some(UserEvent::LoadUrl("lh://localhost/admin".to_string())),
                _ => Some(UserEvent::EvalScript(
                    "lhToast('Invalid password')".to_string(),
                )),
            }
        }

        "logout" => {
            let _ = state.app.auth.logout();
            Some(UserEvent::LoadUrl("lh://localhost/home".to_string()))
        }

        "add_link" => {
            let category = msg.get("category").and_then(|v| v.as_str()).unwrap_or("");
            if !state.app.store.categories().iter().any(|c| c.name == category) {
                return Some(UserEvent::EvalScript(
                    "lhToast('Select a category first')".to_string(),
                ));
            }
            let draft = LinkDraft {
                title: msg.get("title").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                url: msg.get("url").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                category: category.to_string(),
                image_url: msg
                    .get("imageUrl")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(String::from),
                description: msg
                    .get("description")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            };
            match state.app.store.add_link(draft) {
                Ok(_) => Some(UserEvent::LoadUrl("lh://localhost/admin".to_string())),
                Err(e) => Some(UserEvent::EvalScript(format!(
                    "lhToast({})",
                    serde_json::json!(e.to_string())
                ))),
            }
        }

        "update_link" => {
            let id = msg.get("id").and_then(|v| v.as_str())?.to_string();
            let patch = LinkPatch {
                title: msg.get("title").and_then(|v| v.as_str()).map(String::from),
                url: msg.get("url").and_then(|v| v.as_str()).map(String::from),
                category: msg.get("category").and_then(|v| v.as_str()).map(String::from),
                image_url: msg
                    .get("imageUrl")
                    .and_then(|v| v.as_str())
                    .map(|s| if s.is_empty() { None } else { Some(s.to_string()) }),
                description: msg
                    .get("description")
                    .and_then(|v| v.as_str())
                    .map(|s| if s.is_empty() { None } else { Some(s.to_string()) }),
            };
            let _ = state.app.store.update_link(&id, patch);
            Some(UserEvent::LoadUrl("lh://localhost/admin".to_string()))
        }

        "delete_link" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                let _ = state.app.store.delete_link(id);
            }
            Some(UserEvent::LoadUrl("lh://localhost/admin".to_string()))
        }

        "move_link" => {
            let id = msg.get("id").and_then(|v| v.as_str())?.to_string();
            let dir = msg.get("dir").and_then(|v| v.as_i64()).unwrap_or(0);
            let category = state
                .app
                .store
                .links()
                .iter()
                .find(|l| l.id == id)?
                .category
                .clone();
            let mut ordered = state.app.store.links_in_category(&category);
            let pos = ordered.iter().position(|l| l.id == id)?;
            let target = pos as i64 + dir;
            if target >= 0 && (target as usize) < ordered.len() {
                ordered.swap(pos, target as usize);
                for (i, link) in ordered.iter_mut().enumerate() {
                    link.order = i as i64 + 1;
                }
                let _ = state.app.store.reorder_links(&category, ordered);
            }
            Some(UserEvent::LoadUrl("lh://localhost/admin".to_string()))
        }

        "add_category" => {
            let name = msg.get("name").and_then(|v| v.as_str()).unwrap_or("").trim().to_string();
            if name.is_empty() {
                return Some(UserEvent::EvalScript(
                    "lhToast('Category name is required')".to_string(),
                ));
            }
            // Duplicate pre-check is the caller's job; the store appends
            // unconditionally.
            if state.app.store.category_exists(&name) {
                return Some(UserEvent::EvalScript(
                    "lhToast('A category with this name already exists')".to_string(),
                ));
            }
            let _ = state.app.store.add_category(&name);
            Some(UserEvent::LoadUrl("lh://localhost/admin".to_string()))
        }

        "delete_category" => {
            if let Some(name) = msg.get("name").and_then(|v| v.as_str()) {
                let _ = state.app.store.delete_category(name);
            }
            Some(UserEvent::LoadUrl("lh://localhost/admin".to_string()))
        }

        "extract_metadata" => {
            let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            match url_metadata::extract(url) {
                Ok(meta) => Some(UserEvent::EvalScript(format!(
                    "if(typeof lhApplyDescription==='function')lhApplyDescription({})",
                    serde_json::json!(meta.description)
                ))),
                // Non-fatal: leave the form unchanged
                Err(_) => None,
            }
        }

        _ => None,
    }
}

// ─── Main entry point ───

pub fn run() {
    let data_dir = crate::platform::get_data_dir();
    let _ = std::fs::create_dir_all(&data_dir);
    let db_path = data_dir.join("linkhub.db");
    let app = App::new(db_path.to_str().unwrap_or("linkhub.db"))
        .expect("Failed to initialize LinkHub");
    let state = Arc::new(Mutex::new(UiState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Link Hub")
        .with_inner_size(tao::dpi::LogicalSize::new(1120.0, 760.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let page_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("lh".into(), move |_wv_id, request| {
            let path = request.uri().path().to_string();
            let s = page_state.lock().unwrap();
            let html = if let Some(name) = path.strip_prefix("/category/") {
                category_html(&s.app, &urldecode(name))
            } else {
                match path.as_str() {
                    "/admin" => admin_html(&s.app),
                    _ => public_html(&s.app),
                }
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("lh://localhost/home")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
