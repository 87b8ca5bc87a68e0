//! Human-readable session report.
//!
//! Prints what the encode response carries: frequency table, codes,
//! stats, and optionally the laid-out tree. Space, newline, and tab
//! are shown with placeholder glyphs in the tables; the codec itself
//! always works on the literal symbols.

use huffviz_core::api::EncodeResponse;
use huffviz_core::layout::{canvas_height, canvas_width, LayoutNode, Side};

/// Bits of the encoded string shown before eliding.
const ENCODED_PREVIEW_BITS: usize = 2048;

/// Table-friendly rendering of one symbol.
pub fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "\u{2423}".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}

/// Print the full encode report.
pub fn print_report(text: &str, response: &EncodeResponse, show_tree: bool) {
    println!("=== Input ===");
    println!(
        "Length: {} characters, {} distinct",
        text.chars().count(),
        response.frequency_table.len()
    );
    println!();

    println!("=== Encoded ===");
    let bits = &response.encoded;
    if bits.len() <= ENCODED_PREVIEW_BITS {
        println!("{bits}");
    } else {
        println!("{}... ({} bits total)", &bits[..ENCODED_PREVIEW_BITS], bits.len());
    }
    println!();

    println!("=== Frequency Table ===");
    for entry in response.frequency_table.iter() {
        println!("  {}: {}", display_symbol(entry.symbol), entry.count);
    }
    println!();

    println!("=== Huffman Codes ===");
    for entry in &response.huffman_codes {
        println!("  {}: {}", display_symbol(entry.symbol), entry.code);
    }
    println!();

    println!("=== Compression ===");
    let stats = &response.stats;
    println!("Original size:     {} bits", stats.original_size);
    println!("Compressed size:   {} bits", stats.compressed_size);
    println!("Compression ratio: {:.3}", stats.compression_ratio);
    println!("Space saved:       {:.1}%", stats.space_saved);

    if show_tree {
        println!();
        print_tree(&response.tree_structure);
    }
}

/// Print the laid-out tree, depth-indented, with coordinates.
pub fn print_tree(root: &LayoutNode) {
    let leaves = count_leaves(root);
    let depth = max_depth(root);
    println!(
        "=== Tree ({:.0} x {:.0} canvas) ===",
        canvas_width(leaves),
        canvas_height(depth)
    );
    print_node(root, 0);
}

fn print_node(node: &LayoutNode, depth: usize) {
    let label = match node.side {
        Side::Root => "root",
        Side::Left => "L->",
        Side::Right => "R->",
    };
    print!("{:1$}{label} ", "", depth * 2);
    if node.is_leaf {
        let symbol = node.symbol.map(display_symbol).unwrap_or_default();
        let code = node.code.as_deref().unwrap_or("");
        println!(
            "'{}' freq={} code={} at ({:.0}, {:.0})",
            symbol, node.frequency, code, node.x, node.y
        );
    } else {
        println!("freq={} at ({:.0}, {:.0})", node.frequency, node.x, node.y);
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

fn count_leaves(node: &LayoutNode) -> usize {
    if node.is_leaf {
        1
    } else {
        node.children.iter().map(count_leaves).sum()
    }
}

fn max_depth(node: &LayoutNode) -> usize {
    node.children.iter().map(max_depth).max().map_or(0, |d| d + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbol_glyphs() {
        assert_eq!(display_symbol(' '), "\u{2423}");
        assert_eq!(display_symbol('\n'), "\\n");
        assert_eq!(display_symbol('\t'), "\\t");
        assert_eq!(display_symbol('a'), "a");
        assert_eq!(display_symbol('🎈'), "🎈");
    }
}
