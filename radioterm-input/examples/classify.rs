//! Feed scripted input bursts through the classifier and print each decision.
use radioterm_input::{FilterConfig, InputClassifier, QueueSource};

fn main() {
    let mut classifier = InputClassifier::new(FilterConfig::default());

    let bursts: &[&[u32]] = &[
        &[0x71],                                       // 'q'
        &[0x1b],                                       // standalone Escape
        &[0xe2, 0x82, 0xac],                           // typed Euro sign
        &[0x152],                                      // curses KEY_NPAGE
        &[0x1b, 0x5b, 0x31, 0x3b, 0x35, 0x41],         // CSI 1;5A report
        &[0x1b, 0x5f, 0x47, 0x69, 0x3d, 0x33, 0x31, 0x3b, 0x4f, 0x4b, 0x1b, 0x5c], // kitty OK
        &[0x1b, 0x61],                                 // Alt+a
    ];

    for &burst in bursts {
        let mut source = QueueSource::new(burst.iter().copied());
        match classifier.drain_and_classify(&mut source) {
            Some(key) => println!("{burst:02x?} -> {:?} {:#x}", key.kind, key.code),
            None => println!("{burst:02x?} -> absorbed"),
        }
    }
}
