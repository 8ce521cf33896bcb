//! Built-in chrome document served in place of an overlay window's main frame.
//!
//! The app itself is loaded into `#app-frame`; the surrounding grid draws the
//! resize borders and the button strip posts the close/minify/settings/drag
//! messages through the render process.

pub const OVERLAY_DOCUMENT: &str = concat!(
    "<!DOCTYPE html><html lang=\"en\"><head><style>",
    "body{overflow:hidden;background:none;margin:0;}",
    ".root{position:absolute;z-index:1;inset:0;pointer-events:none;}",
    ".grid{position:absolute;z-index:2;inset:0;display:grid;",
    "grid-template-columns:4px auto 4px;grid-template-rows:4px auto 4px;}",
    ".border{user-select:none;-webkit-user-select:none;background:#3b3b3b;pointer-events:all;}",
    ".button-root{user-select:none;position:absolute;z-index:3;top:0;right:0;}",
    ".button{width:12px;height:12px;cursor:pointer;float:right;pointer-events:all;",
    "background:#5a5a5a;border-radius:2px;margin:2px;}",
    ".button:hover{background:#8a8a8a;}",
    ".button-close:hover{background:#c0392b;}",
    ".button-drag{pointer-events:all;float:right;width:24px;height:8px;margin:4px;",
    "background:repeating-linear-gradient(90deg,#777 0 2px,transparent 2px 4px);cursor:move;}",
    "</style></head><body>",
    "<div style=\"position:absolute;left:0;top:0;padding:0;width:100%;height:100%;\">",
    "<iframe title=\"Bolt App\" id=\"app-frame\" ",
    "style=\"position:relative;width:100%;height:100%;box-sizing:border-box;border:none;\"></iframe>",
    "</div><div class=\"root\"><div class=\"grid\">",
    "<div class=\"border border-tl\"></div><div class=\"border border-t\"></div>",
    "<div class=\"border border-tr\"></div><div class=\"border border-l\"></div><div></div>",
    "<div class=\"border border-r\"></div><div class=\"border border-bl\"></div>",
    "<div class=\"border border-b\"></div><div class=\"border border-br\"></div>",
    "</div><div class=\"button-root\">",
    "<div id=\"button-close\" class=\"button button-close\"></div>",
    "<div id=\"button-minify\" class=\"button button-minify\"></div>",
    "<div id=\"button-settings\" class=\"button button-settings\"></div>",
    "<div id=\"button-drag\" class=\"button-drag\"></div>",
    "</div></div></body></html>",
);
