use season_art_common::{Generator, Month, WorkItem};
use season_art_rust::config::Config;
use season_art_rust::hf_client::{HfInferenceClient, TokioSleeper};

#[tokio::test]
async fn hf_text_to_image_integration() {
    let config = Config::load().expect("invalid environment");
    let token = match config.api_token.clone() {
        Some(token) => token,
        None => {
            eprintln!("HF_TOKEN not set; skipping integration test");
            return;
        }
    };

    let client = HfInferenceClient::new(&config, token).expect("failed to build client");
    let sleeper = TokioSleeper;
    let generator = Generator::new(&client, &sleeper)
        .with_model(config.model.clone())
        .with_policy(config.retry_policy());

    let image = generator
        .generate_with_retry(&WorkItem::new("Integration", Month::January), |status| {
            eprintln!("{}", status)
        })
        .await
        .expect("generation failed");

    assert!(!image.bytes.is_empty());
    let format = image::guess_format(&image.bytes).expect("response is not an image");
    eprintln!("received {:?} ({} bytes)", format, image.bytes.len());
}
