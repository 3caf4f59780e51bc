use super::*;

fn sample_json() -> &'static str {
    r#"{
        "title": "Never Gonna Give You Up",
        "publishedAt": "2009-10-25T06:57:33Z",
        "duration": "PT3M33S",
        "viewCount": "1700000000",
        "channelTitle": "Rick Astley",
        "thumbnails": {
            "default": {"url": "https://img.example/default.jpg", "width": 120, "height": 90},
            "high": {"url": "https://img.example/high.jpg", "width": 480, "height": 360}
        },
        "channelThumbnails": {
            "default": {"url": "https://img.example/avatar.jpg", "width": 88, "height": 88}
        }
    }"#
}

#[test]
fn deserializes_camel_case_record() {
    let data: VideoCardData = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(data.title, "Never Gonna Give You Up");
    assert_eq!(data.published_at, "2009-10-25T06:57:33Z");
    assert_eq!(data.view_count, "1700000000");
    assert_eq!(data.channel_title, "Rick Astley");
    assert!(data.thumbnails.maxres.is_none());
    data.validate().unwrap();
}

#[test]
fn selected_variants_are_fixed() {
    let data: VideoCardData = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(
        data.main_thumbnail().unwrap().url,
        "https://img.example/high.jpg"
    );
    assert_eq!(
        data.avatar_thumbnail().unwrap().url,
        "https://img.example/avatar.jpg"
    );
}

#[test]
fn missing_high_variant_fails_validation() {
    let mut data: VideoCardData = serde_json::from_str(sample_json()).unwrap();
    data.thumbnails.high = None;
    let err = data.validate().unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
    assert!(err.to_string().contains("thumbnails.high"));
}

#[test]
fn missing_default_avatar_fails_validation() {
    let mut data: VideoCardData = serde_json::from_str(sample_json()).unwrap();
    data.channel_thumbnails.default = None;
    let err = data.validate().unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn empty_url_fails_validation() {
    let mut data: VideoCardData = serde_json::from_str(sample_json()).unwrap();
    data.thumbnails.high.as_mut().unwrap().url.clear();
    assert!(data.validate().is_err());
}
