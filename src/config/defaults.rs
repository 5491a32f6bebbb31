//! Built-in lists used when the config file is absent or leaves a section out.

/// Words too generic to name a folder after.
pub const DEFAULT_IGNORE_TOKENS: &[&str] = &[
    "official", "lyrics", "video", "audio", "hd", "remix", "mv", "live", "youtube", "ft", "feat",
    "2025", "720p", "1080", "1080p", "best", "song", "songs", "360p", "featuring", "www", "com",
    "net", "org", "sample", "256k", "season", "episode", "lyric", "music",
];

/// Executable, script and macro-enabled formats the type cleaner never touches.
pub const DEFAULT_DANGEROUS_EXTS: &[&str] = &[
    ".exe", ".dll", ".com", ".msi", ".bin", ".sys", ".bat", ".cmd", ".vbs", ".js", ".jse", ".wsf",
    ".wsh", ".ps1", ".psm1", ".sh", ".bash", ".zsh", ".lnk", ".inf", ".msu", ".msp", ".docm",
    ".xlsm", ".pptm", ".scr", ".pif", ".jar", ".reg",
];

/// Category name -> extensions (leading dot, lowercase).
pub fn default_categories() -> Vec<(String, Vec<String>)> {
    const TABLE: &[(&str, &[&str])] = &[
        (
            "Images",
            &[
                ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".heic", ".heif", ".svg",
                ".ico", ".jfif", ".raw", ".arw", ".cr2", ".nef", ".orf", ".dng",
            ],
        ),
        (
            "Videos",
            &[
                ".mp4", ".mov", ".avi", ".mkv", ".wmv", ".flv", ".webm", ".mpeg", ".mpg", ".3gp",
                ".m4v", ".ts", ".mts", ".vob",
            ],
        ),
        (
            "Audio",
            &[
                ".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a", ".opus", ".aiff", ".mid",
                ".midi",
            ],
        ),
        (
            "Documents",
            &[
                ".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".csv", ".xlsx", ".xls", ".ppt",
                ".pptx", ".epub", ".md", ".tex", ".pages", ".numbers", ".key",
            ],
        ),
        (
            "Archives",
            &[
                ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".iso", ".dmg", ".tgz", ".cab",
            ],
        ),
        (
            "Code",
            &[
                ".py", ".js", ".html", ".css", ".c", ".cpp", ".h", ".hpp", ".java", ".sh", ".ts",
                ".php", ".rb", ".go", ".swift", ".kt", ".rs", ".lua", ".sql", ".json", ".xml",
                ".yml", ".yaml", ".cs", ".vb", ".pl", ".asm", ".bat", ".cmd",
            ],
        ),
        ("Fonts", &[".ttf", ".otf", ".woff", ".woff2", ".eot", ".fon"]),
        (
            "3D_Models",
            &[".obj", ".fbx", ".stl", ".blend", ".3ds", ".dae", ".ply", ".gltf", ".glb"],
        ),
        ("Subtitles", &[".srt", ".vtt", ".ass", ".ssa", ".sub"]),
        (
            "Configs",
            &[".ini", ".cfg", ".conf", ".jsonc", ".toml", ".env", ".properties"],
        ),
        (
            "DiskImages",
            &[".iso", ".img", ".vhd", ".vhdx", ".vdi", ".vmdk"],
        ),
        (
            "Packages",
            &[".deb", ".rpm", ".apk", ".jar", ".whl", ".gem", ".msi"],
        ),
        ("Other", &[]),
    ];

    TABLE
        .iter()
        .map(|(name, exts)| {
            (
                (*name).to_string(),
                exts.iter().map(|e| (*e).to_string()).collect(),
            )
        })
        .collect()
}
