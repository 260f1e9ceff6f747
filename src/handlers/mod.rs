pub mod gists;


pub use gists::{
    configure_gist_routes, create_gist, delete_gist, get_gist, get_revision, list_commits,
    list_file_revisions, update_gist,
};
