//! File system storage for posts and comments

use comments_core::comment::{Comment, CommentStore};
use comments_core::config::StorageConfig;
use comments_core::error::{CommentsError, Result};
use comments_core::post::{Post, PostStore};
use comments_core::types::PostId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Schema version written into every store file
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk envelope for the comments of one post
#[derive(Debug, Serialize, Deserialize)]
struct CommentsFile {
    schema_version: u32,
    comments: Vec<Comment>,
}

impl CommentsFile {
    fn new(comments: Vec<Comment>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            comments,
        }
    }
}

/// On-disk envelope for one post
#[derive(Debug, Serialize, Deserialize)]
struct PostFile {
    schema_version: u32,
    post: Post,
}

impl PostFile {
    fn new(post: Post) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            post,
        }
    }
}

fn check_schema_version(version: u32) -> Result<()> {
    if version != CURRENT_SCHEMA_VERSION {
        return Err(CommentsError::UnsupportedSchemaVersion(version.to_string()));
    }
    Ok(())
}

/// Scoped write: stages into a hidden temp file, renamed into place on commit
///
/// Dropping the transaction without committing removes the staged file, so a
/// failed write never leaves partial state behind.
struct WriteTransaction {
    temp_path: PathBuf,
    final_path: PathBuf,
    committed: bool,
}

impl WriteTransaction {
    fn begin(final_path: PathBuf) -> Result<(Self, fs::File)> {
        let temp_path = temp_sibling(&final_path);
        let file = fs::File::create(&temp_path).map_err(|e| {
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let tx = Self {
            temp_path,
            final_path,
            committed: false,
        };
        Ok((tx, file))
    }

    /// Rename the staged file into place (atomic on most filesystems)
    fn commit(mut self) -> Result<()> {
        fs::rename(&self.temp_path, &self.final_path).map_err(|e| {
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for WriteTransaction {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("store");
    path.with_file_name(format!(".{}.tmp", name))
}

/// File system based store for posts and their comments
///
/// Comments are grouped into one JSON file per post; posts get one JSON file
/// each. Writes go through [`WriteTransaction`], so each operation either
/// lands completely or not at all.
pub struct FileSystemStore {
    /// Base directory for the store
    base_dir: PathBuf,
    /// Comments subdirectory
    comments_dir: PathBuf,
    /// Posts subdirectory
    posts_dir: PathBuf,
    /// Serializes read-modify-write cycles on the per-post files
    write_lock: Mutex<()>,
}

impl FileSystemStore {
    /// Create a new file system store
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let comments_dir = base_dir.join("comments");
        let posts_dir = base_dir.join("posts");

        let store = Self {
            base_dir,
            comments_dir,
            posts_dir,
            write_lock: Mutex::new(()),
        };

        store.ensure_dirs()?;
        Ok(store)
    }

    /// Create a store from configuration, falling back to the default location
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        match &config.base_dir {
            Some(dir) => Self::new(dir.clone()),
            None => Self::default_location(),
        }
    }

    /// Create a store in the default per-user data directory
    pub fn default_location() -> Result<Self> {
        let base_dir = directories::ProjectDirs::from("com", "blog-comments", "blog-comments")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".blog-comments")
            });

        Self::new(base_dir)
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.comments_dir, &self.posts_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    CommentsError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create store directory: {}", e),
                    ))
                })?;
                debug!("Created store directory: {:?}", dir);
            }
        }
        Ok(())
    }

    /// Get the path for the comments file of a post
    fn comments_path(&self, post_id: &PostId) -> PathBuf {
        self.comments_dir.join(format!("{}.json", post_id))
    }

    /// Get the path for a post file
    fn post_path(&self, id: &PostId) -> PathBuf {
        self.posts_dir.join(format!("{}.json", id))
    }

    /// Read all comments of a post; a missing file means no comments yet
    fn read_comments(&self, post_id: &PostId) -> Result<Vec<Comment>> {
        let path = self.comments_path(post_id);
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CommentsError::Io(e)),
        };

        let reader = BufReader::new(file);
        let stored: CommentsFile = serde_json::from_reader(reader)?;
        check_schema_version(stored.schema_version)?;
        Ok(stored.comments)
    }

    /// Serialize a value into its final path through a write transaction
    fn write_json<T: Serialize>(&self, final_path: PathBuf, value: &T) -> Result<()> {
        let (tx, file) = WriteTransaction::begin(final_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        tx.commit()
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get comments directory
    pub fn comments_dir(&self) -> &PathBuf {
        &self.comments_dir
    }

    /// Get posts directory
    pub fn posts_dir(&self) -> &PathBuf {
        &self.posts_dir
    }
}

impl CommentStore for FileSystemStore {
    fn save(&self, comment: Comment) -> Result<Comment> {
        let _guard = self.write_lock.lock().unwrap();

        let mut comments = self.read_comments(&comment.post_id)?;
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(CommentsError::Validation(format!(
                "Comment with ID {} already exists",
                comment.id
            )));
        }
        comments.push(comment.clone());

        let path = self.comments_path(&comment.post_id);
        self.write_json(path, &CommentsFile::new(comments))?;

        debug!("Saved comment {} for post {}", comment.id, comment.post_id);
        Ok(comment)
    }

    fn find_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>> {
        self.read_comments(post_id)
    }
}

impl PostStore for FileSystemStore {
    fn insert(&self, post: Post) -> Result<Post> {
        let _guard = self.write_lock.lock().unwrap();

        let path = self.post_path(&post.id);
        if path.exists() {
            return Err(CommentsError::Validation(format!(
                "Post with ID {} already exists",
                post.id
            )));
        }

        self.write_json(path, &PostFile::new(post.clone()))?;

        debug!("Saved post {}", post.id);
        Ok(post)
    }

    fn get(&self, id: &PostId) -> Result<Post> {
        let path = self.post_path(id);
        let file = fs::File::open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CommentsError::PostNotFound(id.to_string())
            } else {
                CommentsError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let stored: PostFile = serde_json::from_reader(reader)?;
        check_schema_version(stored.schema_version)?;
        Ok(stored.post)
    }

    fn exists(&self, id: &PostId) -> bool {
        self.post_path(id).exists()
    }
}
