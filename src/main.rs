use std::process;
use std::sync::Arc;

use foglio::{
    application::{
        catalog::CatalogService,
        error::AppError,
        repos::{CreatePostParams, NewCommentParams, UpdatePostParams},
    },
    config::{self, AuthorsCmd, Command, CommentsCmd, PostsCmd},
    domain::types::{AuthorId, CommentId, PostId},
    infra::{error::InfraError, memory::MemoryCatalog, telemetry},
};
use serde::Serialize;
use serde_json::json;
use time::{
    Date, OffsetDateTime, format_description::FormatItem, macros::format_description,
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;
use url::Url;

const CLI_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| InfraError::configuration(err.to_string()))?;

    telemetry::init(&settings.logging)?;

    let store = Arc::new(MemoryCatalog::seeded());
    let catalog = CatalogService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        settings.latency.profile(),
        settings.query.limits(),
    );

    match cli_args.command {
        Command::Posts { command } => run_posts(&catalog, command).await,
        Command::Authors { command } => run_authors(&catalog, command).await,
        Command::Comments { command } => run_comments(&catalog, command).await,
        Command::Tags => print_json(&catalog.all_tags().await?),
    }
}

async fn run_posts(catalog: &CatalogService, command: PostsCmd) -> Result<(), AppError> {
    match command {
        PostsCmd::List { tag, author } => match (tag, author) {
            (Some(_), Some(_)) => Err(AppError::validation(
                "--tag and --author cannot be combined",
            )),
            (Some(tag), None) => print_json(&catalog.posts_by_tag(&tag).await?),
            (None, Some(author)) => {
                print_json(&catalog.posts_by_author(&AuthorId::from(author)).await?)
            }
            (None, None) => print_json(&catalog.list_posts().await?),
        },
        PostsCmd::Show { id } => {
            let post = catalog
                .post_by_id(&PostId::from(id))
                .await?
                .ok_or(AppError::NotFound)?;
            print_json(&post)
        }
        PostsCmd::Search { terms } => print_json(&catalog.search_posts(&terms.join(" ")).await?),
        PostsCmd::Related { id, limit } => {
            let id = PostId::from(id);
            let post = catalog.post_by_id(&id).await?.ok_or(AppError::NotFound)?;
            print_json(&catalog.related_posts(&id, &post.tags, limit).await?)
        }
        PostsCmd::Featured { limit } => print_json(&catalog.featured_posts(limit).await?),
        PostsCmd::Trending { limit } => print_json(&catalog.trending_posts(limit).await?),
        PostsCmd::Create {
            title,
            excerpt,
            body,
            cover_image,
            author,
            tags,
            featured,
            trending,
            published_on,
        } => {
            let params = CreatePostParams {
                title,
                excerpt,
                body_markdown: body,
                cover_image_url: parse_url(&cover_image)?,
                published_on: parse_published_on(published_on.as_deref())?,
                author_id: AuthorId::from(author),
                tags,
                featured,
                trending,
            };
            print_json(&catalog.create_post(params).await?)
        }
        PostsCmd::Update {
            id,
            title,
            excerpt,
            body,
            cover_image,
            tags,
            featured,
            trending,
        } => {
            let params = UpdatePostParams {
                title,
                excerpt,
                body_markdown: body,
                cover_image_url: cover_image.as_deref().map(parse_url).transpose()?,
                tags: if tags.is_empty() { None } else { Some(tags) },
                featured,
                trending,
            };
            print_json(&catalog.update_post(&PostId::from(id), params).await?)
        }
        PostsCmd::Delete { id } => {
            catalog.delete_post(&PostId::from(id.as_str())).await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

async fn run_authors(catalog: &CatalogService, command: AuthorsCmd) -> Result<(), AppError> {
    match command {
        AuthorsCmd::List => print_json(&catalog.list_authors().await?),
        AuthorsCmd::Show { id } => {
            let author = catalog
                .author_by_id(&AuthorId::from(id))
                .await?
                .ok_or(AppError::NotFound)?;
            print_json(&author)
        }
        AuthorsCmd::Posts { id } => {
            print_json(&catalog.posts_by_author(&AuthorId::from(id)).await?)
        }
    }
}

async fn run_comments(catalog: &CatalogService, command: CommentsCmd) -> Result<(), AppError> {
    match command {
        CommentsCmd::List { post_id } => {
            print_json(&catalog.comments_for_post(&PostId::from(post_id)).await?)
        }
        CommentsCmd::Add {
            post_id,
            author,
            body,
            parent,
        } => {
            let params = NewCommentParams {
                post_id: PostId::from(post_id),
                author_id: AuthorId::from(author),
                body,
                parent_id: parent.map(CommentId::from),
            };
            print_json(&catalog.add_comment(params).await?)
        }
        CommentsCmd::Like { id } => {
            print_json(&catalog.like_comment(&CommentId::from(id)).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::unexpected(format!("failed to render output: {err}")))?;
    println!("{out}");
    Ok(())
}

fn parse_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|err| AppError::validation(format!("invalid url `{raw}`: {err}")))
}

fn parse_published_on(raw: Option<&str>) -> Result<Date, AppError> {
    match raw {
        Some(value) => Date::parse(value, CLI_DATE_FORMAT)
            .map_err(|err| AppError::validation(format!("invalid date `{value}`: {err}"))),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}
