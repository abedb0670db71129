//! Fixed report text

/// Values interpolated into the fixed parts of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    /// Project name used in the title
    pub title: String,
    /// Label printed as the root line of the tree block
    pub tree_label: String,
    /// Command that regenerates the report
    pub regenerate_command: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title: "IP Camera Surveillance System".to_string(),
            tree_label: "IP-CSS".to_string(),
            regenerate_command: "structmap generate".to_string(),
        }
    }
}

pub const DIRECTORY_GUIDE: &str = "## Main directories

### `core/` - Cross-platform modules
- `core/common/` - Shared types and utilities
- `core/license/` - Licensing
- `core/network/` - Networking (Ktor, ONVIF, RTSP, WebSocket)

### `shared/` - Kotlin Multiplatform module
Main module with the cross-platform business logic:
- `commonMain/` - Code shared by all platforms
- `androidMain/` - Android implementations
- `iosMain/` - iOS implementations
- `desktopMain/` - Desktop implementations
- `commonTest/` - Tests

### `native/` - Native C++ libraries
- `video-processing/` - Video stream processing
- `analytics/` - AI analytics (object, face and motion detection, ANPR)
- `codecs/` - Codec support (H.264, H.265, MJPEG)

### `server/` - Server side
- `server/api/` - REST API server (Ktor)
- `server/web/` - Web interface (Next.js)

### `android/` - Android application
- `android/app/` - Android app module

### `platforms/` - Platform-specific builds
- `sbc-arm/` - ARM single-board computers
- `server-x86_64/` - x86-64 servers
- `nas-arm/` - ARM NAS
- `nas-x86_64/` - x86-64 NAS
- `client-desktop-x86_64/` - x86-64 desktop clients
- `client-desktop-arm/` - ARM desktop clients
- `client-android/` - Android clients
- `client-ios/` - iOS/macOS clients

### `docs/` - Documentation
All project documentation

### `scripts/` - Scripts
Build, deployment and automation scripts
";

pub const DEPENDENCY_DIAGRAM: &str = "## Module dependencies

```
android/ios/desktop applications (platforms/)
    ↓
shared (KMM)
    ↓     ↓
    ↓  core:network
    ↓     ↓
    ↓  core:common (base types: Resolution, CameraStatus)
    ↓
core:license
    ↓
native (C++ libraries via FFI, not Gradle modules)
```
";

pub const NOTES: &str = "## Notes

- Ignored: `.git`, `.gradle`, `build`, `node_modules`, `.next` and other service directories
- Only important files and source files are shown below the second level
";
