use mandala::description::{Quote, compose_description, fallback_description};
use mandala::{image, qr};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_seed_is_stable_for_identical_descriptions() {
    let description = "From the depths of \"calma\" springs forth a mandala";
    let first = image::seed(description);
    for _ in 0..10 {
        assert_eq!(image::seed(description), first);
    }
    assert!(first < 1000);
}

#[test]
fn test_qr_url_embeds_image_url() {
    let image_url = "http://localhost:5000/static/images/mandala_00ff.png";
    let qr_url = qr::qr_code_url(image_url).expect("build QR URL");
    assert!(qr_url.starts_with("https://api.qrserver.com/v1/create-qr-code/"));
    assert!(qr_url.contains("size=150x150"));
    assert!(qr_url.contains("data=http%3A%2F%2Flocalhost%3A5000%2Fstatic%2Fimages%2Fmandala_00ff.png"));
}

#[test]
fn test_descriptions_always_contain_the_thought() {
    let quote = Quote {
        content: "Be water".to_string(),
        author: "Bruce Lee".to_string(),
    };
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let composed = compose_description("paz interior", &quote, &mut rng);
        assert!(composed.contains("paz interior"));

        let mut rng = StdRng::seed_from_u64(seed);
        let fallback = fallback_description("paz interior", &mut rng);
        assert!(fallback.contains("paz interior"));
    }
}
