//! Command handlers.
//!
//! Each handler calls one or more `ApiClient` resource wrappers and prints
//! a short table, or raw JSON with `--json`. Outcomes worth a status line
//! go through the toast queue, which `main` flushes after the command.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use tracing::warn;

use socialdesk_core::models::{BulkEntry, InboxFilter, PostFilter};
use socialdesk_core::notify::ToastStore;
use socialdesk_core::utils::{format_count, format_date, format_datetime, format_optional, truncate_string};
use socialdesk_core::{ApiClient, ApiError, Config};

use crate::cli::{AccountCommands, BioCommands, BulkCommands, CategoryCommands, Commands, InboxCommands, PostCommands};

const PASSWORD_ENV: &str = "SOCIALDESK_PASSWORD";

/// Caption width in list tables
const CAPTION_WIDTH: usize = 48;

pub struct Context {
    pub api: ApiClient,
    pub config: Config,
    pub toasts: Arc<ToastStore>,
    pub json: bool,
}

impl Context {
    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

pub async fn run(ctx: &mut Context, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email } => login(ctx, email).await,
        Commands::Logout => {
            ctx.api.logout();
            ctx.toasts.success("Signed out");
            Ok(())
        }
        Commands::Whoami => whoami(ctx).await,
        Commands::Posts { command } => posts(ctx, command).await,
        Commands::Accounts { command } => accounts(ctx, command).await,
        Commands::Analytics { days } => analytics(ctx, days).await,
        Commands::Inbox { command } => inbox(ctx, command).await,
        Commands::Bio { command } => bio(ctx, command).await,
        Commands::Categories { command } => categories(ctx, command).await,
        Commands::Bulk { command } => bulk(ctx, command).await,
    }
}

// ============================================================================
// Auth
// ============================================================================

fn prompt_line(label: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{} [{}]: ", label, d),
        None => print!("{}: ", label),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        default
            .map(str::to_string)
            .with_context(|| format!("{} is required", label))
    } else {
        Ok(line.to_string())
    }
}

async fn login(ctx: &mut Context, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => prompt_line("Email", ctx.config.last_email.as_deref())?,
    };
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(p) if !p.is_empty() => p,
        _ => rpassword::prompt_password("Password: ").context("Failed to read password")?,
    };

    let user = match ctx.api.login(&email, &password).await {
        Ok(user) => user,
        Err(ApiError::Unauthorized) => bail!("Invalid email or password"),
        Err(e) => return Err(e.into()),
    };

    ctx.config.last_email = Some(user.email.clone());
    if let Err(e) = ctx.config.save() {
        warn!(error = %e, "Failed to save config");
    }
    ctx.toasts.success(format!("Signed in as {}", user.display_name()));
    Ok(())
}

async fn whoami(ctx: &Context) -> Result<()> {
    match ctx.api.restore_session().await {
        Ok(Some(user)) => {
            if ctx.json {
                return ctx.print_json(&user);
            }
            println!("{}", user.display_name());
            println!("Plan: {}", user.plan);
            if let Some(created) = user.created_at {
                println!("Member since: {}", format_date(&created));
            }
            Ok(())
        }
        Ok(None) => {
            ctx.toasts.info("Not signed in");
            Ok(())
        }
        Err(ApiError::NetworkError(e)) => {
            // Offline: fall back to the last profile we saw
            let cached = ctx.api.session().cache().and_then(|c| c.load_profile().ok().flatten());
            match cached {
                Some(cached) => {
                    println!("{} (cached {})", cached.data.display_name(), cached.age_display());
                    ctx.toasts.error("Offline, showing cached profile");
                    Ok(())
                }
                None => Err(ApiError::NetworkError(e).into()),
            }
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Posts
// ============================================================================

async fn posts(ctx: &Context, command: PostCommands) -> Result<()> {
    match command {
        PostCommands::List { status, skip, limit } => {
            let filter = PostFilter { status, skip, limit };
            let list = ctx.api.list_posts(&filter).await?;

            if filter.status.is_none() && skip == 0 {
                if let Some(cache) = ctx.api.session().cache() {
                    if let Err(e) = cache.save_posts(&list) {
                        warn!(error = %e, "Failed to cache posts");
                    }
                }
            }
            if ctx.json {
                return ctx.print_json(&list);
            }

            println!("{:<38} {:<10} {:<17} {}", "ID", "STATUS", "PLATFORMS", "CAPTION");
            for post in &list.items {
                println!(
                    "{:<38} {:<10} {:<17} {}",
                    post.id,
                    post.status,
                    truncate_string(&post.platforms_display(), 17),
                    post.caption_preview(CAPTION_WIDTH)
                );
            }
            println!("{} of {} posts", list.items.len(), list.total);
            Ok(())
        }
        PostCommands::Show { id } => {
            let post = ctx.api.get_post(&id).await?;
            if ctx.json {
                return ctx.print_json(&post);
            }
            println!("{} [{}] {}", post.id, post.status, post.post_type);
            println!("Created: {}", format_datetime(&post.created_at));
            println!();
            println!("{}", post.caption);
            if let Some(ref tags) = post.hashtags {
                println!("#{}", tags.join(" #"));
            }
            println!();
            for platform in &post.platforms {
                let when = platform
                    .published_at
                    .map(|t| format_datetime(&t))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:<10} @{:<20} {:<10} {}",
                    platform.platform, platform.platform_username, platform.status, when
                );
            }
            for failed in post.failed_platforms() {
                ctx.toasts.error(format!(
                    "{} failed: {}",
                    failed.platform,
                    format_optional(&failed.error_message, "unknown error")
                ));
            }
            Ok(())
        }
        PostCommands::Delete { id } => {
            ctx.api.delete_post(&id).await?;
            ctx.toasts.success(format!("Deleted post {}", id));
            Ok(())
        }
    }
}

// ============================================================================
// Accounts
// ============================================================================

async fn accounts(ctx: &Context, command: AccountCommands) -> Result<()> {
    match command {
        AccountCommands::List => {
            let accounts = ctx.api.list_accounts().await?;
            if let Some(cache) = ctx.api.session().cache() {
                if let Err(e) = cache.save_accounts(&accounts) {
                    warn!(error = %e, "Failed to cache accounts");
                }
            }
            if ctx.json {
                return ctx.print_json(&accounts);
            }
            for account in &accounts {
                println!(
                    "{:<38} {:<10} {:<24} {:<8} since {}",
                    account.id,
                    account.platform,
                    account.handle(),
                    account.status_display(),
                    format_date(&account.connected_at)
                );
            }
            if accounts.is_empty() {
                ctx.toasts.info("No accounts connected. Try `socialdesk accounts connect twitter`.");
            }
            Ok(())
        }
        AccountCommands::Connect { platform } => {
            let start = ctx.api.connect_account(platform).await?;
            println!("Open this URL to connect your {} account:", platform);
            println!("{}", start.authorization_url);
            Ok(())
        }
        AccountCommands::Disconnect { id } => {
            ctx.api.disconnect_account(&id).await?;
            ctx.toasts.success("Account disconnected");
            Ok(())
        }
    }
}

// ============================================================================
// Analytics
// ============================================================================

async fn analytics(ctx: &Context, days: u32) -> Result<()> {
    let dashboard = ctx.api.analytics_dashboard(days).await?;
    if ctx.json {
        return ctx.print_json(&dashboard);
    }

    let o = &dashboard.overview;
    println!("Last {} days", days);
    println!(
        "Posts {} ({} published)  Impressions {}  Reach {}  Followers {}",
        o.total_posts,
        o.total_published,
        format_count(o.total_impressions),
        format_count(o.total_reach),
        format_count(o.total_followers)
    );
    println!(
        "Interactions {}  Engagement {}",
        format_count(o.total_interactions()),
        o.engagement_display()
    );

    if !dashboard.platform_breakdown.is_empty() {
        println!();
        for p in &dashboard.platform_breakdown {
            println!(
                "  {:<10} @{:<20} {:>8} impressions {:>6.2}%",
                p.platform,
                p.platform_username,
                format_count(p.impressions),
                p.engagement_rate
            );
        }
    }
    if let Some(best) = dashboard.best_platform() {
        ctx.toasts.info(format!("Best engagement: {} ({:.2}%)", best.platform, best.engagement_rate));
    }
    Ok(())
}

// ============================================================================
// Inbox
// ============================================================================

async fn inbox(ctx: &Context, command: InboxCommands) -> Result<()> {
    match command {
        InboxCommands::List { unread, platform, limit } => {
            let mut filter = if unread { InboxFilter::unread() } else { InboxFilter::default() };
            filter.platform = platform;
            filter.limit = limit;

            let list = ctx.api.list_inbox(&filter).await?;
            if ctx.json {
                return ctx.print_json(&list);
            }
            for msg in &list.items {
                let marker = if msg.is_read { " " } else { "*" };
                println!(
                    "{} {:<38} {:<9} {:<8} @{:<18} {}",
                    marker,
                    msg.id,
                    msg.platform,
                    msg.message_type,
                    msg.sender_username,
                    truncate_string(&msg.content, CAPTION_WIDTH)
                );
            }
            println!("{} messages, {} unread", list.total, list.unread);
            Ok(())
        }
        InboxCommands::Read { id, all, platform } => {
            if all {
                let updated = ctx.api.mark_all_read(platform.as_deref()).await?;
                ctx.toasts.success(format!("Marked {} messages read", updated));
            } else if let Some(id) = id {
                ctx.api.mark_message_read(&id).await?;
                ctx.toasts.success("Marked read");
            }
            Ok(())
        }
        InboxCommands::Reply { id, text } => {
            let msg = ctx.api.reply_to_message(&id, &text).await?;
            ctx.toasts.success(format!("Replied to @{}", msg.sender_username));
            Ok(())
        }
        InboxCommands::Counts => {
            let counts = ctx.api.unread_counts().await?;
            if ctx.json {
                return ctx.print_json(&counts);
            }
            println!("Unread: {}", counts.total);
            let mut platforms: Vec<_> = counts.by_platform.iter().collect();
            platforms.sort();
            for (platform, n) in platforms {
                println!("  {:<10} {}", platform, n);
            }
            Ok(())
        }
    }
}

// ============================================================================
// Bio pages and categories
// ============================================================================

async fn bio(ctx: &Context, command: BioCommands) -> Result<()> {
    match command {
        BioCommands::List => {
            let pages = ctx.api.list_bio_pages().await?;
            if ctx.json {
                return ctx.print_json(&pages);
            }
            for page in &pages {
                let state = if page.is_published { "published" } else { "draft" };
                println!(
                    "/{:<24} {:<30} {:<9} {} links, {} views, {} clicks",
                    page.slug,
                    truncate_string(&page.title, 30),
                    state,
                    page.links.len(),
                    format_count(page.total_views),
                    format_count(page.total_clicks())
                );
            }
            Ok(())
        }
    }
}

async fn categories(ctx: &Context, command: CategoryCommands) -> Result<()> {
    match command {
        CategoryCommands::List => {
            let categories = ctx.api.list_categories().await?;
            if ctx.json {
                return ctx.print_json(&categories);
            }
            for c in &categories {
                println!("{:<24} {:>4} posts  {}", c.name, c.post_count, c.recycle_display());
            }
            Ok(())
        }
    }
}

// ============================================================================
// Bulk scheduling
// ============================================================================

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

async fn bulk(ctx: &Context, command: BulkCommands) -> Result<()> {
    match command {
        BulkCommands::Template { output } => {
            let template = ctx.api.bulk_template().await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, template)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    ctx.toasts.success(format!("Template saved to {}", path.display()));
                }
                None => print!("{}", template),
            }
            Ok(())
        }
        BulkCommands::Upload { file } => {
            let bytes = read_file(&file)?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.csv".to_string());

            let preview = ctx.api.bulk_upload_csv(&file_name, bytes).await?;
            if ctx.json {
                return ctx.print_json(&preview);
            }
            for row in &preview.entries {
                let mark = if row.is_valid { "ok " } else { "ERR" };
                println!(
                    "{:>4} {} {:<20} {:<20} {}",
                    row.row_number,
                    mark,
                    row.schedule_time,
                    row.platforms.join(","),
                    row.error.as_deref().unwrap_or(&row.caption)
                );
            }
            if preview.is_clean() {
                ctx.toasts.success(format!("{} rows ready to schedule", preview.valid_count));
            } else {
                ctx.toasts.error(format!(
                    "{} of {} rows have errors",
                    preview.invalid_rows().len(),
                    preview.total_rows
                ));
            }
            Ok(())
        }
        BulkCommands::Confirm { file } => {
            let entries: Vec<BulkEntry> = serde_json::from_slice(&read_file(&file)?)
                .with_context(|| format!("{} is not a JSON array of entries", file.display()))?;
            let result = ctx.api.bulk_confirm(&entries).await?;
            ctx.toasts.success(format!("Created {} posts", result.created));
            for err in &result.errors {
                ctx.toasts.error(err.clone());
            }
            Ok(())
        }
    }
}
