// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use comfy_table::Cell;
use comfy_table::Table;
use common_exception::Result;

use crate::DataBlock;

/// Render a set of blocks as a visual table, one header from the first
/// block's schema.
pub fn pretty_format_blocks(blocks: &[DataBlock]) -> Result<String> {
    let mut table = Table::new();
    table.load_preset("||--+-++|    ++++++");

    if let Some(first) = blocks.first() {
        let header = first
            .schema()
            .fields()
            .iter()
            .map(|f| Cell::new(format!("{} ({})", f.name(), f.data_type())))
            .collect::<Vec<_>>();
        table.set_header(header);
    }

    for block in blocks {
        for row in 0..block.num_rows() {
            let cells = block
                .columns()
                .iter()
                .map(|c| Cell::new(format!("{}", c.get(row))))
                .collect::<Vec<_>>();
            table.add_row(cells);
        }
    }

    Ok(table.trim_fmt())
}
