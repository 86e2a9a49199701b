use super::*;

#[test]
fn default_is_all_off() {
    let t = Toggles::default();
    for toggle in Toggle::ALL {
        assert!(!t.is_enabled(toggle), "{toggle} should be off");
    }
}

#[test]
fn all_enables_every_flag() {
    let t = Toggles::all();
    for toggle in Toggle::ALL {
        assert!(t.is_enabled(toggle), "{toggle} should be on");
    }
}

#[test]
fn flip_changes_only_the_named_flag() {
    let mut t = Toggles::default();
    assert!(t.flip(Toggle::Center));
    assert!(t.center);
    assert!(!t.grid && !t.text_box && !t.mouse_coords && !t.fps);
    assert!(!t.flip(Toggle::Center));
    assert_eq!(t, Toggles::default());
}

#[test]
fn set_is_idempotent() {
    let mut t = Toggles::default();
    t.set(Toggle::Fps, true);
    t.set(Toggle::Fps, true);
    assert!(t.fps);
    t.set(Toggle::Fps, false);
    assert!(!t.fps);
}

#[test]
fn names_round_trip_through_from_str() {
    for toggle in Toggle::ALL {
        assert_eq!(toggle.name().parse::<Toggle>().ok(), Some(toggle));
    }
}

#[test]
fn from_str_accepts_snake_case_aliases() {
    assert_eq!("text_box".parse::<Toggle>().ok(), Some(Toggle::TextBox));
    assert_eq!(" mouse_coords ".parse::<Toggle>().ok(), Some(Toggle::MouseCoords));
}

#[test]
fn from_str_rejects_unknown_names() {
    let err = "sparkles".parse::<Toggle>();
    assert!(matches!(err, Err(DrawError::UnknownToggle(name)) if name == "sparkles"));
}

#[test]
fn from_json_reads_camel_case_keys() {
    let t = Toggles::from_json(r#"{"grid": true, "textBox": true, "mouseCoords": true}"#);
    let t = t.unwrap_or_default();
    assert!(t.grid && t.text_box && t.mouse_coords);
    assert!(!t.center && !t.fps);
}

#[test]
fn from_json_defaults_missing_keys() {
    let t = Toggles::from_json("{}").unwrap_or_else(|_| Toggles::all());
    assert_eq!(t, Toggles::default());
}

#[test]
fn from_json_rejects_non_boolean() {
    assert!(matches!(Toggles::from_json(r#"{"grid": "yes"}"#), Err(DrawError::Config(_))));
}

#[test]
fn from_json_rejects_unknown_key() {
    assert!(matches!(Toggles::from_json(r#"{"grdi": true}"#), Err(DrawError::Config(_))));
    assert!(matches!(Toggles::from_json(r#"{"grid": true, "sparkles": false}"#), Err(DrawError::Config(_))));
}

#[test]
fn from_json_rejects_non_object() {
    assert!(Toggles::from_json("[true]").is_err());
    assert!(Toggles::from_json("true").is_err());
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(Toggles::all()).unwrap_or_default();
    assert_eq!(json["textBox"], serde_json::json!(true));
    assert_eq!(json["mouseCoords"], serde_json::json!(true));
}
