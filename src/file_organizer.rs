/// Relocation of files into category directories.
///
/// This module creates category subdirectories under a base directory and
/// moves single files into them, keeping each file's base name.
use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::Category;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// Records one file that was moved during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// The file's base name.
    pub name: String,
    /// The category the file was moved into.
    pub category: Category,
    /// Where the file was before the move.
    pub original_path: PathBuf,
    /// Where the file is now.
    pub new_path: PathBuf,
}

/// Creates category directories and moves files into them.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Ensures `base_path/<category>` exists, creating it and any missing
    /// parents. Calling it again for an existing directory is a no-op.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidyext::file_category::Category;
    /// use tidyext::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let dir = FileOrganizer::ensure_category_dir(Path::new("/tmp/inbox"), Category::Images)?;
    /// assert!(dir.ends_with("Images"));
    /// # Ok::<(), tidyext::OrganizeError>(())
    /// ```
    pub fn ensure_category_dir(base_path: &Path, category: Category) -> OrganizeResult<PathBuf> {
        let category_path = base_path.join(category.dir_name());

        fs::create_dir_all(&category_path).map_err(|e| OrganizeError::DirectoryCreate {
            path: category_path.clone(),
            source: e,
        })?;

        log::debug!("category directory ready: {}", category_path.display());
        Ok(category_path)
    }

    /// Returns the path `file_path` would have inside `dest_dir`.
    ///
    /// Fails with an `AlreadyExists` move error if anything already occupies
    /// that name, so callers never overwrite.
    pub fn destination_for(file_path: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::Move {
                from: file_path.to_path_buf(),
                to: dest_dir.to_path_buf(),
                source: Error::new(ErrorKind::InvalidInput, "file has no name component"),
            })?;

        let destination_path = dest_dir.join(file_name);

        if fs::symlink_metadata(&destination_path).is_ok() {
            return Err(OrganizeError::Move {
                from: file_path.to_path_buf(),
                to: destination_path,
                source: Error::new(ErrorKind::AlreadyExists, "destination already exists"),
            });
        }

        Ok(destination_path)
    }

    /// Moves `file_path` into `dest_dir`, keeping its base name, and returns
    /// the new path. Refuses to overwrite, see [`FileOrganizer::destination_for`].
    pub fn move_file(file_path: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
        let destination_path = Self::destination_for(file_path, dest_dir)?;

        fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::Move {
            from: file_path.to_path_buf(),
            to: destination_path.clone(),
            source: e,
        })?;

        Ok(destination_path)
    }

    /// Moves a file into its category directory within `base_path`, creating
    /// the directory first if needed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidyext::file_category::Category;
    /// use tidyext::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// match FileOrganizer::relocate(
    ///     Path::new("/path/to/base"),
    ///     Path::new("/path/to/base/image.png"),
    ///     Category::Images,
    /// ) {
    ///     Ok(r) => println!("Moved {} to {}", r.name, r.new_path.display()),
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn relocate(
        base_path: &Path,
        file_path: &Path,
        category: Category,
    ) -> OrganizeResult<Relocation> {
        let category_path = Self::ensure_category_dir(base_path, category)?;
        let new_path = Self::move_file(file_path, &category_path)?;

        Ok(Relocation {
            name: file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            category,
            original_path: file_path.to_path_buf(),
            new_path,
        })
    }
}
