// LinkHub UI layer (wry + tao webview), behind the `gui` feature.

pub mod webview_app;
