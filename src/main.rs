#[rocket::main]
async fn main() {
    // Load .env files before Rocket reads its figment
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(e) = mainlib::rocket().launch().await {
        println!("Rocket failed to launch!");
        // Drop the error so Rocket prints its own formatted panic.
        drop(e);
    };
}
