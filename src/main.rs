use floatinput::{FieldConfig, FloatInputUi, InputKind, UiOptions};
use serde_json::json;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    // Field definitions can come from configuration files...
    let email: FieldConfig = serde_json::from_value(json!({
        "name": "email",
        "placeholder": "Email address",
        "kind": "email",
        "primary_color": "#F1773B"
    }))?;

    // ...or be built in code, with notification handlers attached.
    let username = FieldConfig::new("username")
        .with_placeholder("Username")
        .with_initial_value("guest");
    let password = FieldConfig::new("password")
        .with_placeholder("Password")
        .with_kind(InputKind::Password);

    let values = FloatInputUi::new([email, username, password])
        .with_title("Sign in")
        .with_options(UiOptions::default().with_autofocus(true))
        .run()?;

    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
