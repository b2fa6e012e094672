fn main() {
    multiversx_sc_meta_lib::cli_main::<bond_depository::AbiProvider>();
}
