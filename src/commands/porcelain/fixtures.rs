use crate::areas::repository::Repository;
use crate::artifacts::core::config::Config;
use assert_fs::TempDir;
use rstest::fixture;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Writer whose output stays readable after being handed to a repository
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.borrow_mut())).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub(crate) struct TestRepository {
    pub dir: TempDir,
    pub repository: Repository,
    pub output: SharedBuffer,
}

impl TestRepository {
    pub(crate) fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    pub(crate) fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(name)).ok()
    }

    pub(crate) fn remove(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).unwrap();
    }
}

/// Uninitialized repository in a fresh temporary directory
#[fixture]
pub(crate) fn repository() -> TestRepository {
    let dir = TempDir::new().unwrap();
    let output = SharedBuffer::default();
    let repository = Repository::new(
        dir.path(),
        Box::new(output.clone()),
        Config::default().with_pager(false),
    )
    .unwrap();

    TestRepository {
        dir,
        repository,
        output,
    }
}
