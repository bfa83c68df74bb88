//! Browser entry point — mounts the catalog app onto `<body>`.

use leptos::prelude::*;
use storefront::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
