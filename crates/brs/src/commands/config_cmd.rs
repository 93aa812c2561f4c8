//! Config subcommand handlers.

use dialoguer::{Input, Password, Select};
use secrecy::{ExposeSecret, SecretString};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "********";

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_api_key() -> Result<SecretString, CliError> {
    let key = Password::new()
        .with_prompt("API key")
        .interact()
        .map_err(prompt_err)?;
    if key.is_empty() {
        return Err(CliError::Validation {
            field: "api_key".into(),
            reason: "API key cannot be empty".into(),
        });
    }
    Ok(SecretString::from(key))
}

/// Copy of the config with plaintext keys masked, for display.
fn redacted(cfg: &Config) -> Result<toml::Value, CliError> {
    let mut value = toml::Value::try_from(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    if let Some(profiles) = value.get_mut("profiles").and_then(toml::Value::as_table_mut) {
        for (_, profile) in profiles.iter_mut() {
            if let Some(key) = profile.get_mut("api_key") {
                *key = toml::Value::String(REDACTED.into());
            }
        }
    }
    Ok(value)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let path = config::config_file(global);
            let mut cfg = config::load(global)?;
            eprintln!("brs configuration wizard");
            eprintln!("   Config path: {}\n", path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Endpoint
            let endpoint: String = Input::new()
                .with_prompt("Service base URL")
                .default("https://cluster/irisservices/api/v1/public".into())
                .interact_text()
                .map_err(prompt_err)?;
            brs_config::parse_endpoint(&endpoint)?;

            // 3. Tenant
            let tenant: String = Input::new()
                .with_prompt("Tenant id (blank for none)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            // 4. API key and where to keep it
            let key = prompt_api_key()?;
            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the API key?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let api_key = if store_selection == 0 {
                brs_config::store_api_key(&profile_name, &key)?;
                eprintln!("   API key stored in system keyring");
                None
            } else {
                Some(key.expose_secret().to_owned())
            };

            // 5. Build profile and make it the default
            let profile = Profile {
                endpoint,
                tenant_id: (!tenant.is_empty()).then_some(tenant),
                api_key,
                ..Profile::default()
            };
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());

            config::save_config_to(&cfg, &path)?;

            eprintln!("\nConfiguration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: brs sources");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let shown = redacted(&cfg)?;
            let out = output::render_single(config::output_format(global, &cfg), &shown, |v| {
                toml::to_string_pretty(v).unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_file(global).display());
            Ok(())
        }

        // ── SetKey ──────────────────────────────────────────────────
        ConfigCommand::SetKey { profile } => {
            let cfg = config::load(global)?;
            let profile_name =
                profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            if !cfg.profiles.contains_key(&profile_name) {
                return Err(config::profile_not_found(profile_name, &cfg));
            }

            let key = prompt_api_key()?;
            brs_config::store_api_key(&profile_name, &key)?;
            eprintln!("API key stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
