/// Defines the contract for resolving device manufacturers from BSSIDs.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given BSSID.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown or the BSSID is not a full MAC address.
    fn get_vendor(&self, bssid: &str) -> Option<String>;
}
