//! # Compiled Defaults
//!
//! Versioned anchors shipped with the binary, and the DNS names that publish
//! checkpoint attestations. Only stagenet has DNS names.

use super::value_objects::Network;

/// A compiled-in checkpoint: (height, hash hex, optional difficulty).
pub type DefaultCheckpoint = (u64, &'static str, Option<&'static str>);

/// Mainnet anchors, ascending by height.
pub const MAINNET_CHECKPOINTS: &[DefaultCheckpoint] = &[
    (1, "7b9b6064c13231bda96759fcabd21255af66f94ddece53695509ecb528479667", None),
    (10, "7fff6b1b180abe1ade902232b0d39372dd165e82addd0a12514b69115ab29789", None),
    (100, "b922e51c7cccba7f7fd12b395b942a6092566c47879862b127405dc16c3b415a", None),
    (500, "4161494672a7ef39e1a1c6d5e4b3c6e899b5a945cd1dd7239ad734189c663f29", None),
    (1_000, "f75b44cbf1f070814ae83bb54d0d0b98ee0583633ed88b21088a3957ccb675c0", None),
    (2_000, "a739216d63de35fa69c74ff22c2ed201fd2d0dbe7c38a8bbdbb64368fd18aff1", None),
    (3_000, "0d5882e703a4e715450cc2538ead37d2ad2960c0ad9245546187c04b11ae5b4c", None),
    (4_000, "d66aee31dff6b06f5d6f56fdaab71247325b818968c3c555f6626969965487eb", None),
    (5_000, "458bf83117978a24c16e77419d450e81dc808ed8288e3ff301f3e9ff41520b0a", None),
    (5_353, "e96ad3449cec0f97978f1c79120d713c1753116d778b33c6d5609bed99fdd2a7", None),
    (5_500, "58cea8b62686f3a3c0c8f9edd30b02810cad1033ad2eea05fe47f63f0838a460", None),
    (5_544, "963e97cad472b7ab43676129d7eb87c0791ee0f160634ea7d26b02f29230c740", None),
    (6_000, "50f4c25ab0997c79f47b32aa7a766a3821e5e40935d46e03260ca1a913138df1", None),
    (6_500, "f26226611fcd1437882f1a3a484cc8823ea59d009cace890620c093b587b4487", None),
    (7_000, "522b3f918a3976bf79b4802aba906c318880d73daef5e8a3d168b59096a43f3c", None),
    (8_000, "ee949fccb6f4db661f5a38e4c8f487dbaf5bd18bacfb4d77b32eb3bc3abb7794", None),
    (9_500, "b62d0dae7be7012138af83244160797389fffb3ef2aae2ec3d91082b1a58a047", None),
    (10_000, "92388506769d6ee510af6f480099a1f5466a6cae855bb5c51e0bb328457cd5d4", None),
    (12_000, "63554dd0ae6f178f5a8bb94232e5004cae09d3d797d0953c48d0cd93b6b3743c", None),
    (15_622, "189a796e8fb84bdcca69cf8dc2336f0d652a11504dc9c8b5da7f217ae331e867", None),
    (20_000, "5507b571ba1f634810627ca2a8450b894d474762cffd79ddbfaefee3b96f22a5", None),
    (32_139, "b6bb051810a65fdf20c12b8b847e306e670861abeecbfb126b7eb3be55f559ac", None),
    (39_638, "e8d7e2d5389ed04e6beaa53dbc6707a47e76d8f86f074a434ff2e4ff74cda5f3", None),
    (226_000, "d4e076d8a4c23e6e51df50ae038f710fe83b1363c69b5d6c94c3d227912ff10c", None),
    (263_664, "3ea3ebf33bc4c73b00d28addabdf47ca2bf9b0a202f2646a01f5a9121e5d3a54", None),
    (300_000, "8c5a9f86b20861c1dee6ab90ac86d0b1816163c11f5cf8e23566157e36043998", None),
    (325_000, "bc68a60c42480c04877d97611a6d161bf53d5a6c6460073830b32db8bd50d1f0", None),
    (333_000, "b4ef852358df0ff76ed878704b823c82dc8799a83a3caa10874cf56a957b54d8", None),
    (400_000, "5ea6a74691c402be4f428954c00c9b9359a9a1f9afac1317e8115cf793efa039", None),
    (410_500, "7df88b7fd6db121d47571afbbee4cc83a32619d96588eb0de3b082c96b0aa163", None),
    (425_500, "a4e58148141c3389c9a6f25b100fa2c9db2528a83823bfd3cdf343a901fa509b", None),
    (435_000, "b224c2aa24abd65984003200516d3a7a6be511c4f858151e613a4d640dafec75", None),
    (450_555, "ffac1a65eb6e9d1e240d162a2f7a67f7a4a35a70548abd5e62dfd11cd378469a", None),
    (465_000, "0a4a9f3ed25ef43f85b95c34b1d11cdd895da8f90574b555a04a112e0f0004c2", None),
    (469_666, "b5381cf17128d24ce5f7468e3bcbc79c9b227facf13015dbfa825fd67e6ec026", None),
    (475_000, "a3c90ed7101d21fbe0b5fb8e7477ca71bcb165f4de7406ab400b990b334199f0", None),
    (476_483, "8d0f2022420c2d5dc0c3157cf82a0eab296f64bc2f012fe92581ed3e3e54e319", None),
    (478_778, "776ae73e23600e0495a9cdcf198095a614c98e1e9ea0d7d80921ffa2bb4709f0", None),
    (478_865, "d0351a92a966baa632f4983d5c0f54c1a3c6a52514770f872f890446ba000000", None),
];

/// Mainnet publishes no DNS checkpoints.
pub const MAINNET_DNS_NAMES: &[&str] = &[];

/// Testnet publishes no DNS checkpoints.
pub const TESTNET_DNS_NAMES: &[&str] = &[];

/// DNS names publishing `height:hash` TXT records on stagenet.
pub const STAGENET_DNS_NAMES: &[&str] = &[
    "stagenetpoints1.quantum-chain.network",
    "stagenetpoints2.quantum-chain.network",
    "stagenetpoints3.quantum-chain.network",
    "stagenetpoints4.quantum-chain.network",
];

/// Compiled anchors for `network`. Test networks ship none and rely on the
/// override file and DNS.
pub fn default_checkpoints(network: Network) -> &'static [DefaultCheckpoint] {
    match network {
        Network::Mainnet => MAINNET_CHECKPOINTS,
        Network::Testnet | Network::Stagenet => &[],
    }
}

pub fn dns_names(network: Network) -> &'static [&'static str] {
    match network {
        Network::Mainnet => MAINNET_DNS_NAMES,
        Network::Testnet => TESTNET_DNS_NAMES,
        Network::Stagenet => STAGENET_DNS_NAMES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_hash_hex;

    #[test]
    fn test_mainnet_defaults_sorted_and_unique() {
        let heights: Vec<u64> = MAINNET_CHECKPOINTS.iter().map(|(h, _, _)| *h).collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mainnet_defaults_decode() {
        for (height, hash, _) in MAINNET_CHECKPOINTS {
            assert!(parse_hash_hex(hash).is_ok(), "bad hash at height {height}");
        }
    }

    #[test]
    fn test_test_networks_have_no_defaults() {
        assert!(default_checkpoints(Network::Testnet).is_empty());
        assert!(default_checkpoints(Network::Stagenet).is_empty());
        assert!(!default_checkpoints(Network::Mainnet).is_empty());
    }

    #[test]
    fn test_dns_names_only_on_stagenet() {
        assert!(dns_names(Network::Mainnet).is_empty());
        assert!(dns_names(Network::Testnet).is_empty());
        assert!(!dns_names(Network::Stagenet).is_empty());
        assert!(dns_names(Network::Stagenet)
            .iter()
            .all(|name| name.starts_with("stagenet")));
    }
}
