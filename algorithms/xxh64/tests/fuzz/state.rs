use bolero::check;
use xxh64::{Hasher, StateError, SERIALIZED_SIZE};

#[test]
fn fuzz_checkpoint_resume() {
    check!()
        .with_type::<(Vec<u8>, u16)>()
        .for_each(|(data, cut)| {
            // =============================================================================
            // CHECKPOINT AT AN ARBITRARY OFFSET
            // =============================================================================
            let cut = if data.is_empty() {
                0
            } else {
                usize::from(*cut) % (data.len() + 1)
            };
            let (head, tail) = data.split_at(cut);

            let mut original = Hasher::new();
            original.write(head);
            let saved = original.serialize();

            // =============================================================================
            // RESUME MUST MATCH CONTINUING
            // =============================================================================
            let mut resumed = Hasher::deserialize(&saved).unwrap();
            assert_eq!(resumed.serialize(), saved, "Re-encoding changed the state");

            original.write(tail);
            resumed.write(tail);
            assert_eq!(resumed.finalize(), original.finalize(), "Resume at {cut} mismatch");
        });
}

#[test]
fn fuzz_decode_arbitrary_bytes() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let mut target = Hasher::new();
        target.write(b"untouched");
        let before = target.serialize();

        match target.restore(data) {
            Ok(()) => {
                assert_eq!(data.len(), SERIALIZED_SIZE);
                assert_eq!(&data[..4], b"xxh\x06");
            }
            Err(StateError::InvalidMagic) => {
                assert!(data.len() < 4 || &data[..4] != b"xxh\x06");
                assert_eq!(target.serialize(), before, "Rejected buffer mutated state");
            }
            Err(StateError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, SERIALIZED_SIZE);
                assert_eq!(actual, data.len());
                assert_ne!(actual, SERIALIZED_SIZE);
                assert_eq!(target.serialize(), before, "Rejected buffer mutated state");
            }
        }
    });
}
