use chat_wire::protocol::{MAX_TEXT_LEN, Registry, TAG_SIZE};
use chat_wire::{
    ChatMessage, Error, ErrorKind, ErrorResponse, Message, MessageType, RegisterRequest,
    RegisterResponse, UserId, decode_message, encode_message,
};

fn encoded(message: impl Into<Message>) -> Vec<u8> {
    let mut out = Vec::new();
    encode_message(&message.into(), &mut out).unwrap();
    out
}

fn uid(id: i32) -> UserId {
    UserId::new(id).unwrap()
}

#[test]
fn chat_message_bytes() {
    let bytes = encoded(ChatMessage::new(uid(42), "hi"));
    assert_eq!(bytes, [0, 0, 0, 4, 0, 0, 0, 42, 0, 2, b'h', b'i']);
}

#[test]
fn register_request_bytes() {
    let bytes = encoded(RegisterRequest::new(uid(7), "example.org", 5000));

    let mut expected: Vec<u8> = vec![0, 0, 0, 1, 0, 0, 0, 7, 0, 11];
    expected.extend_from_slice(b"example.org");
    expected.extend_from_slice(&[0, 0, 0x13, 0x88]);
    assert_eq!(bytes, expected);
}

#[test]
fn register_response_is_tag_only() {
    let bytes = encoded(RegisterResponse::new());
    assert_eq!(bytes.len(), TAG_SIZE);
    assert_eq!(bytes, [0, 0, 0, 2]);
}

#[test]
fn error_response_bytes() {
    let bytes = encoded(ErrorResponse::new("disk full"));

    let mut expected: Vec<u8> = vec![0, 0, 0, 0, 0, 9];
    expected.extend_from_slice(b"disk full");
    assert_eq!(bytes, expected);
}

#[test]
fn text_length_counts_utf8_bytes() {
    let bytes = encoded(ChatMessage::new(uid(1), "grüß"));
    // 'ü' and 'ß' take two bytes each
    assert_eq!(&bytes[8..10], &[0, 6]);
    assert_eq!(bytes.len(), 8 + 2 + 6);
}

#[test]
fn text_at_prefix_ceiling_roundtrips() {
    let text = "x".repeat(MAX_TEXT_LEN);
    let message = Message::from(ChatMessage::new(uid(3), text.clone()));
    let bytes = encoded(message.clone());

    assert_eq!(&bytes[8..10], &[0xFF, 0xFF]);
    assert_eq!(bytes.len(), 8 + 2 + MAX_TEXT_LEN);

    let decoded = decode_message(bytes.as_slice()).unwrap();
    assert_eq!(decoded, message);
    let Message::ChatMessage(chat) = decoded else {
        panic!("expected chat message");
    };
    assert_eq!(chat.text().len(), MAX_TEXT_LEN);
    assert_eq!(chat.text(), text);
}

#[test]
fn hand_built_peer_frame_decodes() {
    // Chat to user 9999 as a peer would write it
    let mut frame: Vec<u8> = vec![0, 0, 0, 4, 0, 0, 0x27, 0x0F, 0, 5];
    frame.extend_from_slice(b"hello");

    let message = decode_message(frame.as_slice()).unwrap();
    assert_eq!(message, Message::from(ChatMessage::new(uid(9999), "hello")));
    assert_eq!(message.to_string(), "CHAT_MESSAGE (to 9999: 'hello')");
}

#[test]
fn reserved_tag_three_is_unknown() {
    let err = decode_message([0u8, 0, 0, 3].as_slice()).unwrap_err();
    assert!(matches!(err, Error::UnknownMessageType { tag: 3 }));
    assert_eq!(err.kind(), ErrorKind::UnknownMessageType);
}

#[test]
fn negative_user_id_on_wire_rejected() {
    let mut frame: Vec<u8> = vec![0, 0, 0, 1];
    frame.extend_from_slice(&(-5_i32).to_be_bytes());
    frame.extend_from_slice(&[0, 1, b'h', 0, 0, 0, 80]);

    let err = decode_message(frame.as_slice()).unwrap_err();
    assert!(matches!(err, Error::InvalidUserId { value: -5 }));
}

#[test]
fn port_out_of_range_on_wire_rejected() {
    let mut frame: Vec<u8> = vec![0, 0, 0, 1, 0, 0, 0, 7, 0, 1, b'h'];
    frame.extend_from_slice(&70_000_i32.to_be_bytes());

    let err = decode_message(frame.as_slice()).unwrap_err();
    assert!(matches!(err, Error::InvalidPort { value: 70_000 }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn truncated_text_is_io_error() {
    // Length prefix promises 5 bytes, only 2 follow
    let frame = [0u8, 0, 0, 0, 0, 5, b'd', b'i'];
    let err = decode_message(frame.as_slice()).unwrap_err();
    assert!(err.is_truncated());
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn registry_answers_every_type() {
    let registry = Registry::global();
    for msg_type in MessageType::ALL {
        assert!(registry.decoder(msg_type.as_i32()).is_ok(), "{msg_type}");
    }
}
