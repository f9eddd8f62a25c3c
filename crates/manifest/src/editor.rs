use droidpatch_utils::insert_at;

/// Namespace attribute expected on the root `<manifest>` element
pub const ANDROID_XMLNS: &str = r#"xmlns:android="http://schemas.android.com/apk/res/android""#;

/// Permissions the foreground task plugin needs at runtime
pub const REQUIRED_PERMISSIONS: [&str; 5] = [
    "android.permission.INTERNET",
    "android.permission.POST_NOTIFICATIONS",
    "android.permission.FOREGROUND_SERVICE",
    "android.permission.FOREGROUND_SERVICE_DATA_SYNC",
    "android.permission.WAKE_LOCK",
];

/// Marker class identifying an already-declared foreground service.
/// Must match the `android:name` in [`SERVICE_BLOCK`].
pub const SERVICE_CLASS: &str = "com.pravera.flutter_foreground_task.service.ForegroundService";

/// Service declaration inserted into the `<application>` element
pub const SERVICE_BLOCK: &str = r#"
    <service
        android:name="com.pravera.flutter_foreground_task.service.ForegroundService"
        android:exported="false"
        android:foregroundServiceType="dataSync" />"#;

/// Makes sure the root element declares the `android:` namespace.
///
/// Flutter templates always carry it; the textual insertion after the first
/// `<manifest` literal covers hand-stripped files.
#[must_use]
pub fn ensure_namespace(manifest: &str) -> String {
    if manifest.contains(ANDROID_XMLNS) {
        return manifest.to_string();
    }
    manifest.replacen("<manifest", &format!("<manifest {ANDROID_XMLNS}"), 1)
}

/// Appends a `<uses-permission>` line right after the opening tag closes,
/// unless the permission name already occurs anywhere in the text.
#[must_use]
pub fn ensure_permission(manifest: &str, permission: &str) -> String {
    if manifest.contains(permission) {
        return manifest.to_string();
    }
    // end of the first tag line
    let Some(tag_end) = manifest.find('>') else {
        return manifest.to_string();
    };
    let line = format!("\n    <uses-permission android:name=\"{permission}\" />");
    insert_at(manifest, tag_end + 1, &line)
}

/// Inserts `service_block` before the last `</application>`, unless the
/// service class marker is already present.
#[must_use]
pub fn insert_service(manifest: &str, service_block: &str) -> String {
    if manifest.contains(SERVICE_CLASS) {
        return manifest.to_string();
    }
    let Some(close_pos) = manifest.rfind("</application>") else {
        return manifest.to_string();
    };
    let block = format!("{service_block}\n  ");
    insert_at(manifest, close_pos, &block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEMPLATE: &str = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android">
    <application
        android:label="example"
        android:icon="@mipmap/ic_launcher">
        <activity
            android:name=".MainActivity"
            android:exported="true" />
    </application>
</manifest>
"#;

    #[test]
    fn test_ensure_namespace_present_is_noop() {
        assert_eq!(ensure_namespace(TEMPLATE), TEMPLATE);
    }

    #[test]
    fn test_ensure_namespace_inserts_after_root_tag_name() {
        let stripped = TEMPLATE.replace(
            r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android">"#,
            "<manifest>",
        );
        let patched = ensure_namespace(&stripped);
        assert!(patched.starts_with(&format!("<manifest {ANDROID_XMLNS}>")));
    }

    #[test]
    fn test_ensure_namespace_only_touches_first_occurrence() {
        let doubled = "<manifest>\n<!-- <manifest> in a comment -->\n</manifest>";
        let patched = ensure_namespace(doubled);
        assert_eq!(patched.matches(ANDROID_XMLNS).count(), 1);
    }

    #[rstest]
    #[case("android.permission.INTERNET")]
    #[case("android.permission.POST_NOTIFICATIONS")]
    #[case("android.permission.FOREGROUND_SERVICE")]
    #[case("android.permission.FOREGROUND_SERVICE_DATA_SYNC")]
    #[case("android.permission.WAKE_LOCK")]
    fn test_ensure_permission_inserted_exactly_once(#[case] permission: &str) {
        let once = ensure_permission(TEMPLATE, permission);
        assert_eq!(once.matches(permission).count(), 1);

        let twice = ensure_permission(&once, permission);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_ensure_permission_inserts_after_opening_tag() {
        let patched = ensure_permission(TEMPLATE, "android.permission.WAKE_LOCK");
        let tag_end = patched.find('>').unwrap();
        let line_start = tag_end + 1;
        assert!(
            patched[line_start..].starts_with(
                "\n    <uses-permission android:name=\"android.permission.WAKE_LOCK\" />"
            )
        );
    }

    #[test]
    fn test_ensure_permission_no_anchor_is_noop() {
        let malformed = "not xml at all";
        assert_eq!(
            ensure_permission(malformed, "android.permission.WAKE_LOCK"),
            malformed
        );
    }

    #[test]
    fn test_ensure_permission_substring_guard_spans_whole_text() {
        // a permission named in a comment still counts as present
        let commented = TEMPLATE.replace(
            "<application",
            "<!-- android.permission.WAKE_LOCK -->\n    <application",
        );
        assert_eq!(
            ensure_permission(&commented, "android.permission.WAKE_LOCK"),
            commented
        );
    }

    #[test]
    fn test_insert_service_before_last_application_close() {
        let patched = insert_service(TEMPLATE, SERVICE_BLOCK);
        assert_eq!(patched.matches(SERVICE_CLASS).count(), 1);
        let service_pos = patched.find(SERVICE_CLASS).unwrap();
        let close_pos = patched.rfind("</application>").unwrap();
        assert!(service_pos < close_pos);
        assert!(patched.contains("android:foregroundServiceType=\"dataSync\""));
    }

    #[test]
    fn test_insert_service_marker_present_is_noop() {
        let once = insert_service(TEMPLATE, SERVICE_BLOCK);
        let twice = insert_service(&once, SERVICE_BLOCK);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_insert_service_no_application_close_is_noop() {
        let headless = "<manifest>\n</manifest>";
        assert_eq!(insert_service(headless, SERVICE_BLOCK), headless);
    }

    #[test]
    fn test_full_edit_sequence_is_idempotent() {
        let mut manifest = ensure_namespace(TEMPLATE);
        for permission in REQUIRED_PERMISSIONS {
            manifest = ensure_permission(&manifest, permission);
        }
        manifest = insert_service(&manifest, SERVICE_BLOCK);

        let mut again = ensure_namespace(&manifest);
        for permission in REQUIRED_PERMISSIONS {
            again = ensure_permission(&again, permission);
        }
        again = insert_service(&again, SERVICE_BLOCK);

        assert_eq!(again, manifest);
    }
}
