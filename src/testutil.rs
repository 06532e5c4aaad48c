//! Fake Steam installations for tests

use crate::appinfo::encode_catalog;
use crate::config::EngineConfig;
use crate::steam::shortcut_app_id;
use crate::vdf::{Document, Value, encode_binary};

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn doc<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Document {
    entries.into_iter().collect()
}

fn s(v: &str) -> Value {
    Value::Str(v.to_string())
}

/// A home directory with "~/.steam/steam" and a separate "~/.steam/root"
pub struct FakeSteam {
    home: TempDir,
}

impl FakeSteam {
    pub fn new() -> Self {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".steam/steam/steamapps")).unwrap();
        fs::create_dir_all(home.path().join(".steam/root/ubuntu12_32")).unwrap();
        Self { home }
    }

    /// The default layout of a native install: the data lives in
    /// ~/.local/share/Steam and ~/.steam/steam is a symlink to it
    pub fn with_symlinked_steam() -> Self {
        let home = tempfile::tempdir().unwrap();
        let data = home.path().join(".local/share/Steam");
        fs::create_dir_all(data.join("steamapps")).unwrap();
        fs::create_dir_all(home.path().join(".steam/root/ubuntu12_32")).unwrap();
        std::os::unix::fs::symlink(&data, home.path().join(".steam/steam")).unwrap();
        Self { home }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn steam_path(&self) -> PathBuf {
        self.home().join(".steam/steam")
    }

    pub fn steam_root(&self) -> PathBuf {
        self.home().join(".steam/root")
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.home())
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Write an appmanifest and create the install directory in a library
    pub fn manifest_in(&self, library: &Path, app_id: u64, name: &str) -> PathBuf {
        let steamapps = library.join("steamapps");
        self.write(
            &steamapps.join(format!("appmanifest_{}.acf", app_id)),
            format!(
                "\"AppState\"\n{{\n\t\"appid\"\t\t\"{}\"\n\t\"name\"\t\t\"{}\"\n\t\"installdir\"\t\t\"{}\"\n}}\n",
                app_id, name, name
            ),
        );
        let install_path = steamapps.join("common").join(name);
        fs::create_dir_all(&install_path).unwrap();
        install_path
    }

    /// Create the prefix of an app; only a launched prefix gets pfx.lock
    pub fn prefix_in(&self, library: &Path, app_id: u64, launched: bool) {
        let compatdata = library.join("steamapps/compatdata").join(app_id.to_string());
        fs::create_dir_all(compatdata.join("pfx")).unwrap();
        if launched {
            fs::write(compatdata.join("pfx.lock"), "").unwrap();
        }
    }

    /// An installed game in the primary library with a prefix
    pub fn game(&self, app_id: u64, name: &str, launched: bool) {
        let library = self.steam_path();
        self.manifest_in(&library, app_id, name);
        self.prefix_in(&library, app_id, launched);
    }

    /// An official Proton release installed as a Steam app
    pub fn official_proton(&self, app_id: u64, name: &str) {
        let install_path = self.manifest_in(&self.steam_path(), app_id, name);
        fs::write(install_path.join("proton"), "").unwrap();
    }

    /// A custom Proton installation in compatibilitytools.d
    pub fn custom_proton(&self, dir: &str, internal_name: &str) {
        let tool_dir = self.steam_root().join("compatibilitytools.d").join(dir);
        self.write(
            &tool_dir.join("compatibilitytool.vdf"),
            format!(
                r#""compatibilitytools"
{{
  "compat_tools"
  {{
    "{}"
    {{
      "install_path" "."
      "display_name" "{}"
      "from_oslist"  "windows"
      "to_oslist"    "linux"
    }}
  }}
}}"#,
                internal_name, internal_name
            ),
        );
        fs::write(tool_dir.join("proton"), "").unwrap();
    }

    pub fn library_folders(&self, contents: &str) {
        self.write(&self.steam_path().join("steamapps/libraryfolders.vdf"), contents);
    }

    /// Write config.vdf with `body` inside the "Steam" section
    pub fn config_vdf(&self, body: &str) {
        self.write(
            &self.steam_path().join("config/config.vdf"),
            format!(
                r#""InstallConfigStore" {{ "Software" {{ "Valve" {{ "Steam" {{ {} }} }} }} }}"#,
                body
            ),
        );
    }

    /// Write loginusers.vdf from (SteamID64, account name, timestamp) triples
    pub fn login_users(&self, users: &[(u64, &str, u64)]) {
        let mut contents = String::from("\"users\"\n{\n");
        for (id, name, timestamp) in users {
            contents.push_str(&format!(
                "\t\"{}\"\n\t{{\n\t\t\"AccountName\"\t\t\"{}\"\n\t\t\"Timestamp\"\t\t\"{}\"\n\t}}\n",
                id, name, timestamp
            ));
        }
        contents.push('}');
        self.write(&self.steam_path().join("config/loginusers.vdf"), contents);
    }

    /// Write shortcuts.vdf from (exe, appname, startdir) triples
    ///
    /// Returns the shortcut app IDs in the same order.
    pub fn shortcuts(&self, steamid3: u32, entries: &[(&str, &str, &str)]) -> Vec<u64> {
        let shortcuts = doc(entries.iter().enumerate().map(|(i, (exe, name, startdir))| {
            let entry = doc([
                ("AppName", s(name)),
                ("Exe", s(exe)),
                ("StartDir", s(startdir)),
                ("LaunchOptions", s("")),
            ]);
            (i.to_string(), Value::Doc(entry))
        }));
        let root = doc([("shortcuts", Value::Doc(shortcuts))]);

        self.write(
            &self
                .steam_path()
                .join("userdata")
                .join(steamid3.to_string())
                .join("config/shortcuts.vdf"),
            encode_binary(&root),
        );
        entries
            .iter()
            .map(|(exe, name, _)| shortcut_app_id(exe, name))
            .collect()
    }

    /// Write appinfo.vdf with one SteamPlay manifest section holding the
    /// given (section app ID, tool name, alias, tool app ID) compat tools
    pub fn appinfo(&self, tools: &[(u32, &str, Option<&str>, u64)]) {
        let sections: Vec<(u32, Vec<u8>)> = tools
            .iter()
            .map(|(section_id, name, alias, tool_id)| {
                let mut tool = doc([("appid", Value::Int(*tool_id as i64))]);
                if let Some(alias) = alias {
                    tool.insert("aliases", s(alias));
                }
                let compat_tools = doc([(*name, Value::Doc(tool))]);
                let extended = doc([("compat_tools", Value::Doc(compat_tools))]);
                let appinfo = doc([("extended", Value::Doc(extended))]);
                (*section_id, encode_binary(&doc([("appinfo", Value::Doc(appinfo))])))
            })
            .collect();

        self.write(
            &self.steam_path().join("appcache/appinfo.vdf"),
            encode_catalog(&sections),
        );
    }
}
