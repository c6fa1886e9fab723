// Nexus Utilities Module
//
// Path mapping and exclude-pattern helpers used by the project walker.

/// Path conversion utilities (mirrored output paths, relative Unix-style display)
pub mod paths;

/// Exclude pattern utilities (.nexusignore support)
pub mod ignore;
