//! Window host without a display: every request is logged and acknowledged.

use bolt_shell::BrowserResult;
use bolt_shell::WindowBackend;
use bolt_shell::WindowDetails;
use bolt_shell::WindowFactory;

#[derive(Debug, Default)]
pub struct HeadlessFactory;

impl WindowFactory for HeadlessFactory {
    fn open_window(
        &self,
        details: &WindowDetails,
        url: &str,
    ) -> BrowserResult<Box<dyn WindowBackend>> {
        let (width, height) = details.clamped_size();
        tracing::info!(
            url,
            width,
            height,
            x = details.startx,
            y = details.starty,
            overlay = details.controls_overlay,
            "opening headless window"
        );
        Ok(Box::new(HeadlessBackend {
            url: url.to_owned(),
        }))
    }
}

#[derive(Debug)]
pub struct HeadlessBackend {
    url: String,
}

impl WindowBackend for HeadlessBackend {
    fn begin_app_shutdown(&mut self) {
        tracing::info!(url = %self.url, "app shutdown requested");
    }

    fn close_browser(&mut self) {
        tracing::info!(url = %self.url, "browser closed");
    }

    fn show_settings(&mut self) {
        tracing::info!(url = %self.url, "settings panel shown");
    }
}
