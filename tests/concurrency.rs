use std::thread;

use chat_wire::protocol::metrics;
use chat_wire::{ChatMessage, Message, RegisterRequest, UserId, decode_message, encode_message};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn messages_are_send_and_sync() {
    assert_send_sync::<Message>();
    assert_send_sync::<UserId>();
    assert_send_sync::<chat_wire::Codec>();
}

#[test]
fn concurrent_decoders_share_registry() {
    const THREADS: i32 = 8;
    const PER_THREAD: i32 = 200;

    let before = metrics::snapshot();

    thread::scope(|scope| {
        for worker in 0..THREADS {
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    let id = UserId::new(worker * PER_THREAD + i).unwrap();
                    let message: Message = if i % 2 == 0 {
                        ChatMessage::new(id, format!("msg {i} from {worker}")).into()
                    } else {
                        RegisterRequest::new(id, "localhost", 4000).into()
                    };

                    let mut wire = Vec::new();
                    encode_message(&message, &mut wire).unwrap();
                    assert_eq!(decode_message(wire.as_slice()).unwrap(), message);
                }
            });
        }
    });

    let after = metrics::snapshot();
    let total = u64::try_from(THREADS * PER_THREAD).unwrap();
    assert!(after.decoded_messages - before.decoded_messages >= total);
    assert!(after.encoded_messages - before.encoded_messages >= total);
}
