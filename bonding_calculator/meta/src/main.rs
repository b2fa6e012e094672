fn main() {
    multiversx_sc_meta_lib::cli_main::<bonding_calculator::AbiProvider>();
}
