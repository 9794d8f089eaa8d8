//! Subcommand execution.
//!
//! Every command prints one JSON document to `out`. Session bookkeeping
//! (persisting on login, clearing on 401) is the gateway's job; this layer
//! only maps arguments to calls.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;
use std::path::Path;

use gateway::{
    ApiError, CredentialStore, EventForm, Gateway, LoginForm, RegisterForm, Transport, Upload, filter_events,
};
use serde::Serialize;
use serde_json::json;

use crate::args::{Command, EventArgs, EventsCommand, LoginArgs, RegisterArgs, Visibility};
use crate::error::CliError;

/// Run one command against `gw`, writing its JSON result to `out`.
///
/// # Errors
///
/// Invalid input, API failures, and output failures.
pub async fn run<S, T>(gw: &mut Gateway<S, T>, command: Command, out: &mut impl Write) -> Result<(), CliError>
where
    S: CredentialStore,
    T: Transport,
{
    match command {
        Command::Login(args) => login(gw, args, out).await,
        Command::Register(args) => register(gw, args, out).await,
        Command::Logout => {
            gw.logout_remote().await;
            print_json(out, &json!({ "logged_out": true }))
        }
        Command::Whoami { strict } => {
            let user = if strict { Some(gw.require_user().await?) } else { gw.current_user().await };
            print_json(out, &user)
        }
        Command::Events(events) => run_events(gw, events, out).await,
    }
}

async fn login<S: CredentialStore, T: Transport>(
    gw: &mut Gateway<S, T>,
    args: LoginArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let form = LoginForm {
        email: args.email,
        password: args.password,
    };
    let request = form.validate().map_err(|m| CliError::InvalidInput(m.to_owned()))?;
    let response = gw.api().login(&request).await.map_err(|e| match e {
        ApiError::Unauthenticated => CliError::InvalidInput("Invalid email or password.".to_owned()),
        ApiError::Validation { .. } => {
            CliError::InvalidInput(e.first_field_error(&["email", "password"]).unwrap_or_else(|| e.user_message()))
        }
        other => other.into(),
    })?;
    gw.login(&response.token, response.user.clone());
    tracing::info!(user_id = response.user.id, "logged in");
    print_json(out, &response.user)
}

async fn register<S: CredentialStore, T: Transport>(
    gw: &mut Gateway<S, T>,
    args: RegisterArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let form = RegisterForm {
        password_confirmation: args.password_confirmation.unwrap_or_else(|| args.password.clone()),
        name: args.name,
        email: args.email,
        password: args.password,
    };
    let request = form.validate().map_err(|m| CliError::InvalidInput(m.to_owned()))?;
    let response = gw.api().register(&request).await.map_err(|e| match e {
        ApiError::Validation { .. } => CliError::InvalidInput(
            e.first_field_error(&["name", "email", "password"])
                .unwrap_or_else(|| e.user_message()),
        ),
        other => other.into(),
    })?;
    gw.login(&response.token, response.user.clone());
    print_json(out, &response.user)
}

async fn run_events<S: CredentialStore, T: Transport>(
    gw: &mut Gateway<S, T>,
    command: EventsCommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        EventsCommand::List => print_json(out, &gw.my_events().await?),
        EventsCommand::Public { search } => {
            let events = gw.api().public_events().await?;
            let events = match search {
                Some(query) => filter_events(&events, &query),
                None => events,
            };
            print_json(out, &events)
        }
        EventsCommand::Show { id, public } => {
            let event = if public { gw.api().public_event(id).await? } else { gw.event(id).await? };
            print_json(out, &event)
        }
        EventsCommand::Create(fields) => {
            let form = apply_fields(EventForm::default(), fields).await?;
            validate(&form)?;
            let event = gw.create_event(&form).await?;
            tracing::info!(event_id = event.id, "event created");
            print_json(out, &event)
        }
        EventsCommand::Update { id, fields } => {
            let existing = gw.event(id).await?;
            let form = apply_fields(EventForm::from_event(&existing), fields).await?;
            validate(&form)?;
            print_json(out, &gw.update_event(id, &form).await?)
        }
        EventsCommand::Delete { id } => {
            gw.delete_event(id).await?;
            print_json(out, &json!({ "deleted": id }))
        }
        EventsCommand::Participants { id, public } => {
            let participants = if public {
                gw.api().public_participants(id).await?
            } else {
                gw.participants(id).await?
            };
            print_json(out, &participants)
        }
        EventsCommand::Join { id } => {
            gw.join_event(id).await?;
            print_json(out, &json!({ "joined": id }))
        }
        EventsCommand::Leave { id } => {
            gw.leave_event(id).await?;
            print_json(out, &json!({ "left": id }))
        }
        EventsCommand::Checkout { id } => {
            let init_point = gw.start_checkout(id).await?;
            print_json(out, &json!({ "init_point": init_point }))
        }
    }
}

/// Overlay the given flags on `form`, reading the image file if one is named.
pub(crate) async fn apply_fields(mut form: EventForm, fields: EventArgs) -> Result<EventForm, CliError> {
    if let Some(title) = fields.title {
        form.title = title;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(date) = fields.date {
        form.date = date;
    }
    if let Some(city) = fields.city {
        form.city = city;
    }
    if let Some(visibility) = fields.visibility {
        form.is_public = visibility == Visibility::Public;
    }
    if let Some(price) = fields.price {
        form.price = price;
    }
    if !fields.items.is_empty() {
        form.items.clear();
        for item in &fields.items {
            form.add_item(item);
        }
    }
    if let Some(path) = fields.image {
        form.image = Some(read_upload(&path).await?);
    }
    Ok(form)
}

fn validate(form: &EventForm) -> Result<(), CliError> {
    form.validate().map_err(|errors| {
        let joined = errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        CliError::InvalidInput(joined)
    })
}

async fn read_upload(path: &Path) -> Result<Upload, CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(Upload {
        file_name,
        content_type: mime_guess::from_path(path).first_or_octet_stream().essence_str().to_owned(),
        bytes,
    })
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
