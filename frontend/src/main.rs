fn main() {
    // Init debug
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    console_error_panic_hook::set_once();

    dioxus::prelude::launch(dzshort_frontend::App);
}
