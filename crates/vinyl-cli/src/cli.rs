//! Command handlers.
//!
//! Each handler validates raw input, performs the ownership check where one
//! applies, calls the cabinet and renders the result. Rejected writes and
//! invalid input become errors so the process exits non-zero.

use std::fmt;

use anyhow::{Context, Result, bail};
use log::debug;
use serde::Serialize;
use vinyl_core::{
    Cabinet, OperationStatus,
    display::{Albums, Genres, Reviews},
    models::{Outcome, UserActivity, UserProfile, UserStats},
    params::{CreateAlbum, CreateReview, Id, RegisterUser, UpdateAlbum},
    validation::{validate_album_fields, validate_registration, validate_review_fields},
};

use crate::{
    args::{
        AlbumCommands, AlbumFieldArgs, FavoriteCommands, GenreCommands, ReviewCommands,
        UserCommands,
    },
    renderer::TerminalRenderer,
};

/// Everything `user show` prints.
#[derive(Serialize)]
struct UserPage {
    profile: UserProfile,
    stats: UserStats,
    activity: UserActivity,
}

impl fmt::Display for UserPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.profile)?;
        writeln!(f, "{}", self.stats)?;
        write!(f, "{}", self.activity)
    }
}

pub struct Cli {
    cabinet: Cabinet,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(cabinet: Cabinet, renderer: TerminalRenderer) -> Self {
        Self { cabinet, renderer }
    }

    /// Prints a successful outcome, turns a failed one into an error.
    fn report<T: Serialize>(&self, outcome: &Outcome<T>) -> Result<()> {
        if !outcome.is_success() {
            bail!("{}", outcome.message());
        }
        if self.renderer.is_json() {
            self.renderer.json(outcome)
        } else {
            self.renderer
                .render(&OperationStatus::from(outcome).to_string())
        }
    }

    /// Validates the album form and returns the coerced year.
    fn validated_year(fields: &AlbumFieldArgs) -> Result<i64> {
        let form = fields.to_form();
        let errors = validate_album_fields(&form);
        if !errors.is_empty() {
            bail!("Invalid album:\n{errors}");
        }
        form.year_value().context("Year must be a number.")
    }

    /// Fails unless `user_id` added album `album_id`.
    async fn ensure_owner(&self, album_id: u64, user_id: u64) -> Result<()> {
        let album = self
            .cabinet
            .get_album(&Id { id: album_id })
            .await?
            .with_context(|| format!("Album with ID {album_id} not found."))?;
        if album.owner_id != user_id {
            debug!("user {user_id} is not the owner of album {album_id}");
            bail!("You can only modify albums you added.");
        }
        Ok(())
    }

    pub async fn list_albums(&self) -> Result<()> {
        let albums = self.cabinet.list_albums().await?;
        self.renderer.show(&Albums(albums))
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Register(args) => {
                let errors = validate_registration(&args.username, &args.password, &args.confirm);
                if !errors.is_empty() {
                    bail!("Invalid registration:\n{errors}");
                }
                let outcome = self
                    .cabinet
                    .register_user(&RegisterUser {
                        username: args.username.trim().to_string(),
                        password: args.password,
                    })
                    .await?;
                self.report(&outcome)
            }
            UserCommands::Login(args) => {
                let Some(user) = self.cabinet.authenticate(&args.into()).await? else {
                    bail!("Invalid username or password.");
                };
                if self.renderer.is_json() {
                    self.renderer.json(&user)
                } else {
                    let status = OperationStatus::success(format!(
                        "Logged in as {} (ID: {}).",
                        user.username, user.id
                    ));
                    self.renderer.render(&status.to_string())
                }
            }
            UserCommands::Show(args) => {
                let id: Id = args.into();
                let profile = self
                    .cabinet
                    .user_profile(&id)
                    .await?
                    .with_context(|| format!("User with ID {} not found.", id.id))?;
                let page = UserPage {
                    profile,
                    stats: self.cabinet.user_stats(&id).await?,
                    activity: self.cabinet.user_activity(&id).await?,
                };
                self.renderer.show(&page)
            }
            UserCommands::Profile(args) => {
                let outcome = self.cabinet.update_profile(&args.into()).await?;
                self.report(&outcome)
            }
        }
    }

    pub async fn handle_album_command(&self, command: AlbumCommands) -> Result<()> {
        match command {
            AlbumCommands::Add(args) => {
                let year = Self::validated_year(&args.fields)?;
                let form = args.fields.to_form();
                let outcome = self
                    .cabinet
                    .add_album(&CreateAlbum {
                        title: form.title,
                        artist: form.artist,
                        year,
                        genre_ids: form.genre_ids,
                        owner_id: args.user,
                        image_url: args.fields.image_url,
                    })
                    .await?;
                self.report(&outcome)
            }
            AlbumCommands::Update(args) => {
                let year = Self::validated_year(&args.fields)?;
                self.ensure_owner(args.id, args.user).await?;
                let form = args.fields.to_form();
                let outcome = self
                    .cabinet
                    .update_album(&UpdateAlbum {
                        id: args.id,
                        title: form.title,
                        artist: form.artist,
                        year,
                        genre_ids: form.genre_ids,
                        image_url: args.fields.image_url,
                    })
                    .await?;
                self.report(&outcome)
            }
            AlbumCommands::Delete(args) => {
                self.ensure_owner(args.id, args.user).await?;
                self.cabinet.delete_album(&Id { id: args.id }).await?;
                self.report(&Outcome::success(args.id, "Album deleted."))
            }
            AlbumCommands::Show(args) => {
                let details = self
                    .cabinet
                    .get_album_details(&Id { id: args.id }, args.user)
                    .await?
                    .with_context(|| format!("Album with ID {} not found.", args.id))?;
                self.renderer.show(&details)
            }
            AlbumCommands::List => self.list_albums().await,
            AlbumCommands::Search(args) => {
                let albums = self.cabinet.browse_albums(&args.into()).await?;
                self.renderer.show(&Albums(albums))
            }
            AlbumCommands::Mine(args) => {
                let albums = self.cabinet.user_albums(&args.into()).await?;
                self.renderer.show(&Albums(albums))
            }
        }
    }

    pub async fn handle_genre_command(&self, command: GenreCommands) -> Result<()> {
        match command {
            GenreCommands::List => {
                let genres = self.cabinet.list_genres().await?;
                self.renderer.show(&Genres(genres))
            }
            GenreCommands::Add(args) => {
                let params = args.into();
                let outcome = self.cabinet.add_genre(&params).await?;
                self.report(&outcome)
            }
        }
    }

    pub async fn handle_review_command(&self, command: ReviewCommands) -> Result<()> {
        match command {
            ReviewCommands::Add(args) => {
                let errors = validate_review_fields(args.stars);
                if !errors.is_empty() {
                    bail!("Invalid review:\n{errors}");
                }
                let stars = u8::try_from(args.stars).context("Rating out of range")?;
                let outcome = self
                    .cabinet
                    .add_review(&CreateReview {
                        album_id: args.album_id,
                        user_id: args.user,
                        stars,
                        text: args.text.trim().to_string(),
                    })
                    .await?;
                self.report(&outcome)
            }
            ReviewCommands::List(args) => {
                let reviews = self.cabinet.album_reviews(&args.into()).await?;
                self.renderer.show(&Reviews(reviews))
            }
        }
    }

    pub async fn handle_favorite_command(&self, command: FavoriteCommands) -> Result<()> {
        match command {
            FavoriteCommands::Toggle(args) => {
                let outcome = self.cabinet.toggle_favorite(&args.into()).await?;
                self.report(&outcome)
            }
            FavoriteCommands::List(args) => {
                let albums = self.cabinet.user_favorites(&args.into()).await?;
                self.renderer.show(&Albums(albums))
            }
        }
    }
}
