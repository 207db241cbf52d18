//! Rendered PLIST documents for the sample fixtures
//!
//! Each test converts one sample from `tests/fixtures` and pins the full output, envelope
//! included.

use y2p_parser::y2p::loader::DocumentLoader;
use y2p_parser::y2p::testing::sample_path;

fn convert_sample(name: &str) -> String {
    DocumentLoader::from_path(sample_path(name))
        .unwrap()
        .convert()
        .unwrap()
}

#[test]
fn test_basic_items_document() {
    insta::assert_snapshot!(convert_sample("basic-items"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
<key>name</key>
<string>test</string>
<key>items</key>
<array>
<string>one</string>
<string>two</string>
</array>
</dict>
</plist>
"#);
}

#[test]
fn test_nested_sequences_document() {
    insta::assert_snapshot!(convert_sample("nested-sequences"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
<key>servers</key>
<array>
<dict>
<key>name</key>
<string>alpha</string>
<key>port</key>
<string>8080</string>
<key>tags</key>
<array>
<string>web</string>
<string>edge</string>
</array>
</dict>
<dict>
<key>name</key>
<string>beta</string>
<key>port</key>
<string>9090</string>
<key>env</key>
<dict>
<key>region</key>
<string>eu</string>
<key>zone</key>
<string>b</string>
</dict>
</dict>
</array>
<key>owner</key>
<string>ops</string>
</dict>
</plist>
"#);
}

#[test]
fn test_inline_literals_document() {
    insta::assert_snapshot!(convert_sample("inline-literals"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
<key>point</key>
<dict>
<key>x</key>
<string>1</string>
<key>y</key>
<string>2</string>
</dict>
<key>tags</key>
<array>
<string>red</string>
<string>green</string>
<string>blue</string>
</array>
<key>empty_list</key>
<array>
</array>
<key>empty_map</key>
<dict>
</dict>
<key>pending</key>
<dict>
</dict>
<key>quoted</key>
<string>hello world</string>
</dict>
</plist>
"#);
}

#[test]
fn test_app_settings_document() {
    insta::assert_snapshot!(convert_sample("app-settings"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
<key>bundle_id</key>
<string>com.example.app</string>
<key>display_name</key>
<string>Example App</string>
<key>version</key>
<string>1.4.2</string>
<key>permissions</key>
<array>
<string>camera</string>
<dict>
<key>always</key>
<string>false</string>
<key>reason</key>
<string>Nearby stores</string>
</dict>
<dict>
<key>name</key>
<string>microphone</string>
<key>reason</key>
<string>Voice memos</string>
</dict>
</array>
<key>location_keys</key>
<dict>
<key>always</key>
<string>false</string>
<key>reason</key>
<string>Nearby stores</string>
</dict>
<key>launch</key>
<dict>
<key>mode</key>
<string>cold</string>
<key>timeout</key>
<string>5</string>
</dict>
</dict>
</plist>
"#);
}

#[test]
fn test_rendering_is_repeatable() {
    let tree = DocumentLoader::from_path(sample_path("app-settings"))
        .unwrap()
        .parse()
        .unwrap();
    let first = y2p_parser::y2p::formats::render_plist(&tree).unwrap();
    let second = y2p_parser::y2p::formats::render_plist(&tree).unwrap();
    assert_eq!(first, second);
}
