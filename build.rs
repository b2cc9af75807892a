fn main() {
    // Propagate the ESP-IDF build environment for device builds. Host builds
    // (tests, simulation) carry no sysenv and this emits nothing.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
