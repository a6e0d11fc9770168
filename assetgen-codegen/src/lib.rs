//! TypeScript and React bindings for scanned asset directories.
//!
//! [`AssetManifest::scan`] inventories every enabled root and [`Generator`]
//! turns the inventory into `types.ts`, `assets.ts`, `utils.ts` and, for
//! React projects, `hooks.ts` and `Asset.tsx`, tied together by `index.ts`.

mod ast;
mod builder;
mod generator;
mod manifest;

pub mod files;

pub use builder::CodeBuilder;
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use manifest::{AssetEntry, AssetManifest, Category, asset_url};
