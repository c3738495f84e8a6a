fn main() {
    println!("cargo::rerun-if-env-changed=DZSHORT_BASE_URL");
    println!("cargo::rerun-if-env-changed=BASE_URL");

    let base_url = ["DZSHORT_BASE_URL", "BASE_URL"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
        .unwrap_or_else(|| "/".to_owned());
    println!("cargo::rustc-env=DZSHORT_BASE_URL={base_url}");
}
