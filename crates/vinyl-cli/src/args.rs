//! Command-line argument definitions.
//!
//! Clap-derived argument structs stay in this crate; each converts into the
//! matching `vinyl_core::params` type once its raw input has been validated.
//!
//! ```text
//! User Input → CLI Args (clap) → Validation → Core Params → Cabinet
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vinyl_core::{
    params::{
        CreateGenre, Credentials, Id, SearchAlbums, UpdateProfile, UserAlbum,
    },
    validation::AlbumForm,
};

/// Vinyl Cabinet: catalogue, tag, favorite and review your record collection.
///
/// Without a subcommand every album in the cabinet is listed.
#[derive(Parser)]
#[command(version, about, name = "vinyl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/vinyl-cabinet/cabinet.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage accounts and profiles
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage albums
    #[command(alias = "a")]
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },
    /// Manage the genre list
    #[command(alias = "g")]
    Genre {
        #[command(subcommand)]
        command: GenreCommands,
    },
    /// Write and read reviews
    #[command(alias = "r")]
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
    /// Mark albums as favorites
    #[command(alias = "f")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
}

// ----------------------------------------------------------------------------
// Users
// ----------------------------------------------------------------------------

/// Create an account
#[derive(clap::Args)]
pub struct RegisterArgs {
    pub username: String,
    #[arg(short, long)]
    pub password: String,
    /// Repeat the password
    #[arg(short, long)]
    pub confirm: String,
}

/// Check a username and password
#[derive(clap::Args)]
pub struct LoginArgs {
    pub username: String,
    #[arg(short, long)]
    pub password: String,
}

impl From<LoginArgs> for Credentials {
    fn from(val: LoginArgs) -> Self {
        Credentials {
            username: val.username,
            password: val.password,
        }
    }
}

/// Show a user's profile, stats and recent activity
#[derive(clap::Args)]
pub struct ShowUserArgs {
    #[arg(help = "ID of the user to show")]
    pub id: u64,
}

impl From<ShowUserArgs> for Id {
    fn from(val: ShowUserArgs) -> Self {
        Id { id: val.id }
    }
}

/// Save profile fields. Omitted fields are cleared.
#[derive(clap::Args)]
pub struct ProfileArgs {
    #[arg(help = "ID of the user whose profile to save")]
    pub id: u64,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// URL of the profile picture
    #[arg(long)]
    pub picture: Option<String>,
    /// ID of the favorite genre
    #[arg(long)]
    pub favorite_genre: Option<u64>,
}

/// Empty strings count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<ProfileArgs> for UpdateProfile {
    fn from(val: ProfileArgs) -> Self {
        UpdateProfile {
            user_id: val.id,
            bio: non_blank(val.bio),
            location: non_blank(val.location),
            profile_image_url: non_blank(val.picture),
            favorite_genre_id: val.favorite_genre,
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an account
    #[command(alias = "r")]
    Register(RegisterArgs),
    /// Check a username and password
    #[command(alias = "l")]
    Login(LoginArgs),
    /// Show a user's profile, stats and recent activity
    #[command(alias = "s")]
    Show(ShowUserArgs),
    /// Save profile fields
    #[command(alias = "p")]
    Profile(ProfileArgs),
}

// ----------------------------------------------------------------------------
// Albums
// ----------------------------------------------------------------------------

/// Album fields shared by add and update.
#[derive(clap::Args)]
pub struct AlbumFieldArgs {
    pub title: String,
    pub artist: String,
    /// Release year, digits only
    pub year: String,
    /// Genre IDs as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub genres: Vec<u64>,
    /// Cover image URL
    #[arg(short, long)]
    pub image_url: Option<String>,
}

impl AlbumFieldArgs {
    /// The raw form, trimmed, ready for validation.
    pub fn to_form(&self) -> AlbumForm {
        AlbumForm {
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
            year: self.year.trim().to_string(),
            genre_ids: self.genres.clone(),
        }
    }
}

/// Add an album to the cabinet
#[derive(clap::Args)]
pub struct AddAlbumArgs {
    /// ID of the user adding the album
    #[arg(short, long)]
    pub user: u64,
    #[command(flatten)]
    pub fields: AlbumFieldArgs,
}

/// Edit an album you added. Every field is overwritten.
#[derive(clap::Args)]
pub struct UpdateAlbumArgs {
    /// ID of the user making the change; must be the owner
    #[arg(short, long)]
    pub user: u64,
    #[arg(help = "ID of the album to edit")]
    pub id: u64,
    #[command(flatten)]
    pub fields: AlbumFieldArgs,
}

/// Delete an album you added
#[derive(clap::Args)]
pub struct DeleteAlbumArgs {
    /// ID of the user deleting; must be the owner
    #[arg(short, long)]
    pub user: u64,
    #[arg(help = "ID of the album to delete")]
    pub id: u64,
}

/// Show an album with its reviews
#[derive(clap::Args)]
pub struct ShowAlbumArgs {
    #[arg(help = "ID of the album to show")]
    pub id: u64,
    /// Viewing user, for favorite and review state
    #[arg(short, long)]
    pub user: Option<u64>,
}

/// Search albums by title, artist, year or genre
#[derive(clap::Args)]
pub struct SearchAlbumsArgs {
    /// Search terms; every term must match. Blank lists every album.
    pub terms: Vec<String>,
    /// Requesting user, to flag favorites
    #[arg(short, long)]
    pub user: Option<u64>,
}

impl From<SearchAlbumsArgs> for SearchAlbums {
    fn from(val: SearchAlbumsArgs) -> Self {
        SearchAlbums {
            query: val.terms.join(" "),
            user_id: val.user,
        }
    }
}

/// List the albums a user added
#[derive(clap::Args)]
pub struct UserArgs {
    #[arg(short, long)]
    pub user: u64,
}

impl From<UserArgs> for Id {
    fn from(val: UserArgs) -> Self {
        Id { id: val.user }
    }
}

#[derive(Subcommand)]
pub enum AlbumCommands {
    /// Add an album
    #[command(alias = "a")]
    Add(AddAlbumArgs),
    /// Edit an album you added
    #[command(alias = "u")]
    Update(UpdateAlbumArgs),
    /// Delete an album you added
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteAlbumArgs),
    /// Show an album with its reviews
    #[command(alias = "s")]
    Show(ShowAlbumArgs),
    /// List every album
    #[command(aliases = ["l", "ls"])]
    List,
    /// Search albums
    #[command(alias = "f")]
    Search(SearchAlbumsArgs),
    /// List the albums a user added
    #[command(alias = "m")]
    Mine(UserArgs),
}

// ----------------------------------------------------------------------------
// Genres
// ----------------------------------------------------------------------------

/// Add a genre to the list
#[derive(clap::Args)]
pub struct AddGenreArgs {
    pub name: String,
}

impl From<AddGenreArgs> for CreateGenre {
    fn from(val: AddGenreArgs) -> Self {
        CreateGenre {
            name: val.name.trim().to_string(),
        }
    }
}

#[derive(Subcommand)]
pub enum GenreCommands {
    /// List every genre
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a genre
    #[command(alias = "a")]
    Add(AddGenreArgs),
}

// ----------------------------------------------------------------------------
// Reviews and favorites
// ----------------------------------------------------------------------------

/// Review an album
#[derive(clap::Args)]
pub struct AddReviewArgs {
    /// ID of the reviewing user
    #[arg(short, long)]
    pub user: u64,
    #[arg(help = "ID of the album to review")]
    pub album_id: u64,
    /// Star rating from 1 to 5
    #[arg(allow_negative_numbers = true)]
    pub stars: i64,
    /// Optional review text
    #[arg(default_value = "")]
    pub text: String,
}

/// List the reviews of an album
#[derive(clap::Args)]
pub struct AlbumIdArgs {
    #[arg(help = "ID of the album")]
    pub album_id: u64,
}

impl From<AlbumIdArgs> for Id {
    fn from(val: AlbumIdArgs) -> Self {
        Id { id: val.album_id }
    }
}

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Review an album
    #[command(alias = "a")]
    Add(AddReviewArgs),
    /// List the reviews of an album
    #[command(aliases = ["l", "ls"])]
    List(AlbumIdArgs),
}

/// Toggle an album in a user's favorites
#[derive(clap::Args)]
pub struct ToggleFavoriteArgs {
    #[arg(short, long)]
    pub user: u64,
    #[arg(help = "ID of the album")]
    pub album_id: u64,
}

impl From<ToggleFavoriteArgs> for UserAlbum {
    fn from(val: ToggleFavoriteArgs) -> Self {
        UserAlbum {
            user_id: val.user,
            album_id: val.album_id,
        }
    }
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Add or remove a favorite
    #[command(alias = "t")]
    Toggle(ToggleFavoriteArgs),
    /// List a user's favorites
    #[command(aliases = ["l", "ls"])]
    List(UserArgs),
}
