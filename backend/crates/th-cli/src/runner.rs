use crate::output::{checksums_json, route_json, status_json, token_json, user_json};
use crate::{
    Cli, CliErrorResult, CommandContext, Commands, RouteCommands, UserCommands, logger,
};

use th_config::Config;
use th_core::{UserIdentity, resolve};
use th_db::open_pool;
use th_notify::{LogNotificationSink, NotificationQueue, NotificationWorker};

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Load configuration, start logging, then run the parsed command.
///
/// User commands open the database and run a notification worker for the
/// duration of the command; the worker drains before this returns.
pub async fn run(cli: Cli) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    match cli.command {
        Commands::Route { action } => execute_route(action),
        Commands::User { action } => {
            let database_path = config.database_path()?;
            let pool = open_pool(&database_path, config.database.max_connections).await?;

            let (queue, receiver) = NotificationQueue::bounded(config.notification.queue_capacity);
            let worker = NotificationWorker::spawn(receiver, Arc::new(LogNotificationSink));

            let ctx = CommandContext::from_config(&config, pool.clone(), queue);
            let result = execute_user(action, &ctx).await;

            // Dropping the context closes the queue so the worker can finish
            drop(ctx);
            let delivered = worker.join().await;
            if delivered > 0 {
                info!("Delivered {} notification(s)", delivered);
            }
            pool.close().await;

            result
        }
    }
}

pub fn execute_route(action: RouteCommands) -> CliErrorResult<Value> {
    match action {
        RouteCommands::Resolve { path } => {
            let route = resolve(&path);
            Ok(route_json(&path, route.as_ref()))
        }
    }
}

pub async fn execute_user(action: UserCommands, ctx: &CommandContext) -> CliErrorResult<Value> {
    let lifecycle = &ctx.lifecycle;

    match action {
        UserCommands::Create {
            username,
            email,
            first_name,
            last_name,
            verified,
            groups,
        } => {
            let mut identity = if verified {
                UserIdentity::new_verified(username, email)?
            } else {
                UserIdentity::new(username, email)?
            };
            identity.first_name = first_name.unwrap_or_default();
            identity.last_name = last_name.unwrap_or_default();
            identity.groups = groups;
            identity.refresh_checksums();

            lifecycle.register(&identity).await?;
            Ok(user_json(&identity, &ctx.web_url))
        }

        UserCommands::List { all } => {
            let users = lifecycle.list(all).await?;
            Ok(Value::Array(
                users
                    .iter()
                    .map(|identity| user_json(identity, &ctx.web_url))
                    .collect(),
            ))
        }

        UserCommands::Show { username } => {
            let identity = lifecycle.find_by_username(&username).await?;
            let mut value = user_json(&identity, &ctx.web_url);
            value["organizations_count"] = json!(lifecycle.organizations_count(&identity).await?);
            value["owned_organizations_count"] =
                json!(lifecycle.owned_organizations_count(&identity).await?);
            Ok(value)
        }

        UserCommands::Status { username } => {
            let identity = lifecycle.find_by_username(&username).await?;
            Ok(status_json(&identity))
        }

        UserCommands::Checksums { username, store } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            if store {
                lifecycle.set_checksums(&mut identity).await?;
            }
            Ok(checksums_json(&identity))
        }

        UserCommands::Verify {
            username,
            token,
            force,
        } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            let verified = lifecycle
                .mark_verified(&mut identity, token.as_deref().unwrap_or_default(), force)
                .await?;
            Ok(json!({
                "username": identity.username(),
                "verified": verified,
                "status": identity.status(),
            }))
        }

        UserCommands::BeginVerification { username } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            lifecycle.begin_verification(&mut identity).await?;
            Ok(user_json(&identity, &ctx.web_url))
        }

        UserCommands::Deactivate { username } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            lifecycle.deactivate(&mut identity).await?;
            Ok(status_json(&identity))
        }

        UserCommands::Reactivate { username } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            lifecycle.reactivate(&mut identity).await?;
            Ok(status_json(&identity))
        }

        UserCommands::RotateToken { username } => {
            let identity = lifecycle.find_by_username(&username).await?;
            let token = lifecycle.rotate_token(&identity).await?;
            Ok(token_json(&identity, &token))
        }

        UserCommands::Token { username } => {
            let identity = lifecycle.find_by_username(&username).await?;
            let token = lifecycle.get_or_issue_token(&identity).await?;
            Ok(token_json(&identity, &token))
        }

        UserCommands::SetToken { username, key } => {
            let identity = lifecycle.find_by_username(&username).await?;
            let token = lifecycle.set_token(&identity, &key).await?;
            Ok(token_json(&identity, &token))
        }

        UserCommands::SetPassword {
            username,
            password,
            hashed,
        } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            let update = lifecycle
                .update_credential(&mut identity, password.as_deref(), hashed)
                .await?;
            Ok(json!({
                "username": identity.username(),
                "changed": update.is_changed(),
                "token": update.token().map(|token| token.key.as_str()),
            }))
        }

        UserCommands::ResetPassword { username } => {
            let identity = lifecycle.find_by_username(&username).await?;
            lifecycle.send_reset_password(&identity).await?;
            Ok(json!({
                "username": identity.username(),
                "queued": true,
                "reset_password_url": identity.reset_password_url(&ctx.web_url),
            }))
        }

        UserCommands::Groups { username, groups } => {
            let mut identity = lifecycle.find_by_username(&username).await?;
            lifecycle.set_groups(&mut identity, groups).await?;
            Ok(json!({
                "username": identity.username(),
                "groups": identity.groups,
            }))
        }
    }
}
