fn main() {
    #[cfg(target_arch = "wasm32")]
    leave_portal_frontend::run();
}
