//! Registration and chat exchange over an in-memory stream

use std::io::Cursor;

use chat_wire::{
    ChatMessage, ErrorResponse, Message, RegisterRequest, RegisterResponse, UserId,
    decode_message, encode_message,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Chat wire round trip");
    println!("====================\n");

    let alice = UserId::new(7)?;
    let outbound: Vec<Message> = vec![
        RegisterRequest::new(alice, "127.0.0.1", 5000).into(),
        RegisterResponse::new().into(),
        ChatMessage::new(UserId::new(42)?, "hi").into(),
        ChatMessage::new(UserId::BROADCAST, "hello everyone").into(),
        ErrorResponse::from_error(&std::io::Error::other("disk full")).into(),
    ];

    // One stream, messages back to back; no outer framing
    let mut stream = Vec::new();
    for message in &outbound {
        encode_message(message, &mut stream)?;
    }
    println!("Encoded {} messages into {} bytes", outbound.len(), stream.len());

    let mut cursor = Cursor::new(stream);
    for expected in &outbound {
        let decoded = decode_message(&mut cursor)?;
        println!("  {decoded}");
        assert_eq!(&decoded, expected);
    }

    if let Message::RegisterRequest(request) = &outbound[0] {
        let user = request.to_user()?;
        println!("\nRegistered user {} at {}", user.user_id(), user.endpoint());
    }

    Ok(())
}
