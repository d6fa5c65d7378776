#[cfg(feature = "csr")]
fn main() {
    // client-side entry point, run with `trunk serve`
    use campground::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // nothing to mount without the csr feature
}
