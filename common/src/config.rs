/// What the scan parser does with the block still open when the input ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrailingBlock {
    /// Flush the last block as a regular observation.
    #[default]
    Emit,
    /// Never emit the last block. Blocks are only closed by the next `BSS` line.
    Drop,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// 0 prints everything, 1 hides banners and headers, 2 only prints the summary.
    pub quiet: u8,
    pub no_banner: bool,
    /// Writes the report as JSON on stdout instead of the terminal view.
    pub json: bool,
    /// Resolves the vendor of every reported BSSID from the OUI database.
    pub vendors: bool,
    pub trailing_block: TrailingBlock,
}
