pub mod navigation;
pub mod storage;

use web_sys::Window;

/// The browser window. Host builds (SSR tests) have none, and touching
/// `web_sys` there would abort.
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
