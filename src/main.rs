//! Client-side entry point: mounts the app onto `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(capmatch_web::app::App);
    }
}
