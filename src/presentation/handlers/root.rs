pub async fn root_handler() -> &'static str {
    "api success"
}
