//! Throw-away cargo projects used to compile and run test code end to end.
use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fs::{read_to_string, File},
    io::{Read, Write},
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
    sync::{Arc, RwLock},
};

use toml_edit::{Array, Document, Item, Table};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Beta,
    Nightly,
    Custom(String),
}

pub static CHANNEL_DEFAULT: Channel = Channel::Stable;
/// Environment variable that selects the toolchain used to run the projects.
pub static ENV_CHANNEL: &str = "MULTITEST_TEST_CHANNEL";

impl From<String> for Channel {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "stable" => Channel::Stable,
            "beta" => Channel::Beta,
            "nightly" => Channel::Nightly,
            _ => Channel::Custom(value),
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        std::env::var(ENV_CHANNEL)
            .ok()
            .map(Channel::from)
            .unwrap_or_else(|| CHANNEL_DEFAULT.clone())
    }
}

impl Channel {
    fn cargo_arg(&self) -> String {
        match self {
            Channel::Stable => "+stable".into(),
            Channel::Beta => "+beta".into(),
            Channel::Nightly => "+nightly".into(),
            Channel::Custom(name) => format!("+{name}"),
        }
    }
}

/// A cargo library project. Subprojects share the root workspace so the
/// dependencies are compiled just once.
pub struct Project {
    pub name: OsString,
    root: PathBuf,
    channel: Channel,
    nocapture: bool,
    ws: Arc<RwLock<()>>,
}

impl Project {
    const GLOBAL_TEST_ATTR: &'static str = "#![cfg(test)]";

    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_owned(),
            name: "project".into(),
            channel: Default::default(),
            nocapture: false,
            ws: Arc::new(RwLock::new(())),
        }
        .create()
    }

    pub fn get_name(&self) -> Cow<str> {
        self.name.to_string_lossy()
    }

    pub fn with_nocapture(mut self) -> Self {
        self.nocapture = true;
        self
    }

    pub fn subproject<O: AsRef<OsStr>>(&self, name: O) -> Self {
        let _guard = self.ws.write().expect("Cannot lock workspace resource");
        self.workspace_add(&name.as_ref().to_string_lossy());
        Self {
            root: self.path(),
            name: name.as_ref().to_owned(),
            channel: self.channel.clone(),
            nocapture: self.nocapture,
            ws: self.ws.clone(),
        }
        .create()
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    /// Run `cargo test` and collect its output.
    pub fn run_tests(&self) -> std::io::Result<Output> {
        let _guard = self.ws.read().expect("Cannot lock workspace resource");
        let mut cmd = self.cargo_test();
        if self.nocapture {
            cmd.args(["--", "--nocapture"]);
        }
        cmd.output()
    }

    /// Run `cargo test -- --list`: the output contains the name of every
    /// test without running them.
    pub fn list_tests(&self) -> std::io::Result<Output> {
        let _guard = self.ws.read().expect("Cannot lock workspace resource");
        self.cargo_test().args(["--", "--list"]).output()
    }

    fn cargo_test(&self) -> Command {
        if !self.has_test_global_attribute(self.code_path()) {
            self.add_test_global_attribute(self.code_path())
        }
        let mut cmd = Command::new("cargo");
        cmd.current_dir(self.path())
            .arg(self.channel.cargo_arg())
            .arg("test");
        cmd
    }

    fn create(self) -> Self {
        let status = Command::new("cargo")
            .current_dir(&self.root)
            .arg("init")
            .args(["--lib", "--edition", "2021"])
            .arg(&self.name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("cannot run cargo init");
        match status.code() {
            Some(0) => {
                File::create(self.code_path()).expect("cannot create lib.rs");
                self
            }
            code => panic!("cargo init return an error code: {code:?}"),
        }
    }

    fn has_test_global_attribute(&self, path: impl AsRef<Path>) -> bool {
        read_to_string(&path)
            .unwrap()
            .starts_with(Self::GLOBAL_TEST_ATTR)
    }

    fn add_test_global_attribute(&self, path: impl AsRef<Path>) {
        let body = read_to_string(&path).unwrap();
        let mut out = File::create(&path).unwrap();

        writeln!(out, "{}", Self::GLOBAL_TEST_ATTR).unwrap();
        write!(out, "{body}").unwrap();
    }

    pub fn set_code_file<P: AsRef<Path>>(self, src: P) -> Self {
        std::fs::copy(src, self.code_path()).unwrap();
        self
    }

    pub fn append_code<S: AsRef<str>>(&self, code: S) {
        std::fs::OpenOptions::new()
            .append(true)
            .open(self.code_path())
            .unwrap()
            .write_all(code.as_ref().as_ref())
            .unwrap()
    }

    pub fn add_dependency(&self, crate_name: &str, attrs: &str) {
        let mut doc = self.read_cargo_toml();

        doc["dependencies"].or_insert(Item::Table(Table::new()))[crate_name]
            .or_insert(Item::Value(attrs.parse().unwrap()));

        self.save_cargo_toml(&doc);
    }

    /// Depend on the crate under test: the one where tests are running.
    pub fn add_local_dependency(&self, name: &str) {
        self.add_dependency(
            name,
            format!(r#"{{path="{}"}}"#, self.exec_dir_str()).as_str(),
        );
    }

    pub fn exec_dir_str(&self) -> String {
        std::env::current_dir()
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/")
    }

    fn workspace_add(&self, prj: &str) {
        let mut doc = self.read_cargo_toml();

        if let Some(members) = doc["workspace"].or_insert(Item::Table(Table::new()))["members"]
            .or_insert(Item::Value(Array::default().into()))
            .as_array_mut()
        {
            members.push(prj)
        }

        self.save_cargo_toml(&doc);
    }

    fn code_path(&self) -> PathBuf {
        self.path().join("src").join("lib.rs")
    }

    fn cargo_toml_path(&self) -> PathBuf {
        self.path().join("Cargo.toml")
    }

    fn read_cargo_toml(&self) -> Document {
        let mut orig = String::new();
        File::open(self.cargo_toml_path())
            .expect("cannot open Cargo.toml")
            .read_to_string(&mut orig)
            .expect("cannot read Cargo.toml");

        orig.parse::<Document>().expect("invalid Cargo.toml")
    }

    fn save_cargo_toml(&self, doc: &Document) {
        File::create(self.cargo_toml_path())
            .expect("cannot update Cargo.toml")
            .write_all(doc.to_string().as_bytes())
            .expect("cannot write Cargo.toml");
    }
}
