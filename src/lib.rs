//! `xform-hash` implements a family of rigid-body transform hash functions
//! for SE(3) (3D translation composed with 3D rotation).
//!
//! Each hash maps a continuous transform to a compact 64-bit key such that
//! nearby transforms map to the same or neighboring keys, and any key can be
//! inverted to a canonical cell-center transform at a bounded deviation
//! determined by a user-chosen resolution. This is the geometric core used
//! for hash-based clustering of sampled poses, neighbor lookup over SE(3),
//! and compact persistence of pose sets; it does not itself store any
//! key-to-payload mapping.
//!
//! Seven variants (see [`hash`]) share one architecture along two
//! orthogonal axes: how the rotation is parameterized (a raw quaternion, or
//! a 24-cell chart id plus local params) and how the resulting coordinates
//! are packed into a key (a flat lattice index, or a Z-order/Morton
//! interleave).

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::default_union_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::empty_drop,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::future_not_send,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::non_send_fields_in_send_ty,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic,
    clippy::path_buf_push_overwrite,
    clippy::pattern_type_mismatch,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_pub_crate,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trailing_empty_array,
    clippy::trait_duplication_in_bounds,
    clippy::transmute_undefined_repr,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::type_repetition_in_bounds,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unseparated_literal_suffix,
    clippy::unused_peekable,
    clippy::unused_rounding,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads
)]
#![allow(
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
    // The covering-radius/nori tables are opaque constants copied verbatim;
    // this crate doesn't attempt to express their derivation in code.
    clippy::decimal_literal_representation,
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// }}}

mod dilated;
pub mod error;
pub mod hash;
mod lattice;
pub mod linalg;
mod orientation;

pub use dilated::{dilate, undilate};
pub use hash::{
    BccSix, BccThreeFlat, BccThreeZorder, CubicZorder, QuatBcc7, QuatBcc7Zorder, QuatgridCubic,
};
pub use lattice::{BccLattice, CubicLattice};
pub use orientation::TetracontoctachoronMap;

/// A 64-bit key produced by any `XformHash` variant.
///
/// The layout of the bits depends on the variant; see each variant's own
/// documentation.
pub type Key = u64;
