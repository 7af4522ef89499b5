#![allow(non_snake_case)]

mod view;

use folio_dioxus::prelude::*;

fn main() {
    Desktop::boot("folio").with_root(view::RootShell).run()
}
