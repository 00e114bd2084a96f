use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print a stored object: blob bytes verbatim, commits as their text body
    ///
    /// Full ids may name either kind of object; shorter ids are resolved as commit
    /// prefixes.
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        let _lock = self.lock(LockMode::Shared)?;

        let object_id = if object_id.len() == OBJECT_ID_LENGTH {
            ObjectId::try_parse(object_id.to_string())?
        } else {
            self.resolve_commit(object_id)?
        };

        match self.database().parse_object(&object_id)? {
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            object @ ObjectBox::Commit(_) => write!(self.writer(), "{}", object.display())?,
        }

        Ok(())
    }
}
