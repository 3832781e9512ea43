//! Snapshot tests for generated packs and server bundles.
//!
//! These tests verify that the generated JavaScript matches the expected output
//! byte for byte. Run `cargo insta review` after intentional changes.

use std::{fs, path::Path, str::FromStr};

use autopack_codegen::{GenerateOptions, GenerateStatus, Generator};
use autopack_config::Config;
use autopack_core::{LocalFs, MemoryFs};
use tempfile::TempDir;

const COMPONENTS: &str = "/app/app/javascript/bundles/ror_components";

fn config(packs: &str) -> Config {
    Config::from_str(&format!(
        "[packs]\nauto_load_bundle = true\ncomponents_subdirectory = \"ror_components\"\n{packs}"
    ))
    .expect("Failed to parse config")
}

/// Preview every generated file, keyed by path relative to `/app`.
fn preview(fs: &MemoryFs, config: &Config) -> Vec<(String, String)> {
    Generator::new(fs, config, Path::new("/app"))
        .preview()
        .expect("Preview failed")
        .into_iter()
        .map(|f| {
            let path = f.path.strip_prefix("/app").unwrap_or(&f.path);
            (path.display().to_string(), f.content)
        })
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_client_pack() {
    let fs = MemoryFs::new().with_file(format!("{COMPONENTS}/HelloWorld.jsx"), "");
    let files = preview(&fs, &config(""));

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/packs/generated/HelloWorld.js"),
        @r#"
import ReactOnRails from 'react-on-rails/client';
import HelloWorld from '../../bundles/ror_components/HelloWorld.jsx';

ReactOnRails.register({HelloWorld});
"#
    );
}

#[test]
fn test_client_variant_pack_imports_client_file() {
    let fs = MemoryFs::new()
        .with_file(format!("{COMPONENTS}/Nav.client.tsx"), "")
        .with_file(format!("{COMPONENTS}/Nav.server.tsx"), "");
    let files = preview(&fs, &config(""));

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/packs/generated/Nav.js"),
        @r#"
import ReactOnRails from 'react-on-rails/client';
import Nav from '../../bundles/ror_components/Nav.client.tsx';

ReactOnRails.register({Nav});
"#
    );
}

#[test]
fn test_server_component_pack() {
    let fs = MemoryFs::new().with_file(
        format!("{COMPONENTS}/Feed.jsx"),
        "export default async function Feed() {}\n",
    );
    let files = preview(&fs, &config("server_components = true\n"));

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/packs/generated/Feed.js"),
        @r#"
import registerServerComponent from 'react-on-rails/registerServerComponent/client';

registerServerComponent("Feed");
"#
    );
}

#[test]
fn test_server_bundle() {
    let fs = MemoryFs::new()
        .with_file(format!("{COMPONENTS}/A.jsx"), "")
        .with_file(format!("{COMPONENTS}/B.jsx"), "")
        .with_file(format!("{COMPONENTS}/Nav.client.jsx"), "")
        .with_file(format!("{COMPONENTS}/Nav.server.jsx"), "");
    let files = preview(&fs, &config("server_bundle_js_file = \"server-bundle.js\"\n"));

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/generated/server-bundle-generated.js"),
        @r#"
import ReactOnRails from 'react-on-rails';

import A from '../bundles/ror_components/A.jsx';
import B from '../bundles/ror_components/B.jsx';
import Nav from '../bundles/ror_components/Nav.server.jsx';

ReactOnRails.register({A,
B,
Nav});
"#
    );
}

#[test]
fn test_server_bundle_with_server_components() {
    let fs = MemoryFs::new()
        .with_file(format!("{COMPONENTS}/Feed.jsx"), "import db from 'db';\n")
        .with_file(
            format!("{COMPONENTS}/Like.jsx"),
            "/* Like button */\n\"use client\";\n",
        )
        .with_file(format!("{COMPONENTS}/Post.jsx"), "export default 1;\n");
    let files = preview(
        &fs,
        &config("server_bundle_js_file = \"server-bundle.js\"\nserver_components = true\n"),
    );

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/generated/server-bundle-generated.js"),
        @r#"
import ReactOnRails from 'react-on-rails';

import Feed from '../bundles/ror_components/Feed.jsx';
import Like from '../bundles/ror_components/Like.jsx';
import Post from '../bundles/ror_components/Post.jsx';

import registerServerComponent from 'react-on-rails/registerServerComponent/server';
registerServerComponent({Feed,
Post});

ReactOnRails.register({Like});
"#
    );
}

#[test]
fn test_server_variant_replaces_common_in_bundle_order() {
    let fs = MemoryFs::new()
        .with_file("/app/app/javascript/a/ror_components/Card.jsx", "")
        .with_file("/app/app/javascript/b/ror_components/Menu.client.jsx", "")
        .with_file("/app/app/javascript/b/ror_components/Menu.server.jsx", "")
        .with_file("/app/app/javascript/c/ror_components/Table.jsx", "");
    let files = preview(&fs, &config("server_bundle_js_file = \"server-bundle.js\"\n"));

    insta::assert_snapshot!(
        get_file(&files, "app/javascript/generated/server-bundle-generated.js"),
        @r#"
import ReactOnRails from 'react-on-rails';

import Card from '../a/ror_components/Card.jsx';
import Table from '../c/ror_components/Table.jsx';
import Menu from '../b/ror_components/Menu.server.jsx';

ReactOnRails.register({Card,
Table,
Menu});
"#
    );
}

#[test]
fn test_generate_on_disk() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let components = temp.path().join("app/javascript/bundles/ror_components");
    let entry_dir = temp.path().join("app/javascript/packs");
    fs::create_dir_all(&components).unwrap();
    fs::create_dir_all(&entry_dir).unwrap();
    fs::write(components.join("Hello.jsx"), "export default 1;\n").unwrap();
    fs::write(entry_dir.join("server-bundle.js"), "import './polyfills';\n").unwrap();

    let config = config("server_bundle_js_file = \"server-bundle.js\"\n");
    let local = LocalFs::new();
    let generator = Generator::new(&local, &config, temp.path());

    let first = generator.generate(GenerateOptions::default()).unwrap();
    assert_eq!(first.status, GenerateStatus::Generated);
    assert!(first.entry_import_added);

    let second = generator.generate(GenerateOptions::default()).unwrap();
    assert_eq!(second.status, GenerateStatus::UpToDate);

    let entry = fs::read_to_string(entry_dir.join("server-bundle.js")).unwrap();
    insta::assert_snapshot!(entry, @r#"
import "./../generated/server-bundle-generated.js"
import './polyfills';
"#);

    let pack = fs::read_to_string(entry_dir.join("generated/Hello.js")).unwrap();
    assert!(pack.ends_with("ReactOnRails.register({Hello});"));
    assert!(
        temp.path()
            .join("app/javascript/generated/server-bundle-generated.js")
            .exists()
    );
}
