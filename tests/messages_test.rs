//! Message schemas composed from the codec primitives.

use kafka_wire::protocol::messages::{
    ApiVersionV3, ApiVersionsResponseV3, FetchPartitionV0, FetchRequestV0,
    FetchResponsePartitionV0, FetchResponseTopicV0, FetchResponseV0, FetchTopicV0,
};
use kafka_wire::{Decodable, Encodable, RawTaggedField, WireError};

fn encode<M: Encodable>(message: &M) -> Vec<u8> {
    let mut buf = Vec::<u8>::new();
    message.encode(&mut buf).unwrap();
    buf
}

fn fetch_request() -> FetchRequestV0 {
    FetchRequestV0 {
        replica_id: -1,
        max_wait_ms: 3000,
        min_bytes: 1,
        topics: vec![FetchTopicV0 {
            topic: "test-topic1".into(),
            partitions: vec![FetchPartitionV0 {
                partition: 0,
                fetch_offset: 0,
                partition_max_bytes: 10_000,
            }],
        }],
    }
}

#[test]
fn fetch_request_v0_layout() {
    let buf = encode(&fetch_request());
    let mut expected = vec![
        0xff, 0xff, 0xff, 0xff, // replica_id -1
        0x00, 0x00, 0x0b, 0xb8, // max_wait_ms 3000
        0x00, 0x00, 0x00, 0x01, // min_bytes
        0x00, 0x00, 0x00, 0x01, // topics
        0x00, 0x0b, // topic length
    ];
    expected.extend_from_slice(b"test-topic1");
    expected.extend_from_slice(&[
        0x00, 0x00, 0x00, 0x01, // partitions
        0x00, 0x00, 0x00, 0x00, // partition
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // fetch_offset
        0x00, 0x00, 0x27, 0x10, // partition_max_bytes 10000
    ]);
    assert_eq!(buf, expected);
    assert_eq!(FetchRequestV0::decode(&mut &buf[..]).unwrap(), fetch_request());
}

#[test]
fn fetch_response_v0_keeps_null_and_present_records() {
    let response = FetchResponseV0 {
        responses: vec![FetchResponseTopicV0 {
            topic: "test-topic1".into(),
            partitions: vec![
                FetchResponsePartitionV0 {
                    partition_index: 0,
                    error_code: 0,
                    high_watermark: 42,
                    records: Some(vec![0x00, 0x01, 0x02]),
                },
                FetchResponsePartitionV0 {
                    partition_index: 1,
                    error_code: 3,
                    high_watermark: -1,
                    records: None,
                },
            ],
        }],
    };
    let buf = encode(&response);
    let mut src = &buf[..];
    assert_eq!(FetchResponseV0::decode(&mut src).unwrap(), response);
    assert!(src.is_empty());
}

#[test]
fn api_versions_response_v3_layout() {
    let response = ApiVersionsResponseV3 {
        error_code: 0,
        api_keys: vec![ApiVersionV3 {
            api_key: 18,
            min_version: 0,
            max_version: 4,
            tagged_fields: Vec::new(),
        }],
        throttle_time_ms: 0,
        tagged_fields: Vec::new(),
    };
    let buf = encode(&response);
    assert_eq!(
        buf,
        vec![
            0x00, 0x00, // error_code
            0x02, // compact array: 1 entry
            0x00, 0x12, 0x00, 0x00, 0x00, 0x04, 0x00, // entry + empty tagged fields
            0x00, 0x00, 0x00, 0x00, // throttle_time_ms
            0x00, // tagged fields
        ]
    );
    assert_eq!(ApiVersionsResponseV3::decode(&mut &buf[..]).unwrap(), response);
}

#[test]
fn unknown_tagged_fields_survive_reencoding() {
    let response = ApiVersionsResponseV3 {
        error_code: 0,
        api_keys: vec![ApiVersionV3 {
            api_key: 1,
            min_version: 4,
            max_version: 13,
            tagged_fields: vec![RawTaggedField::new(7, b"entry-ext".to_vec())],
        }],
        throttle_time_ms: 100,
        tagged_fields: vec![
            RawTaggedField::new(0, b"a".to_vec()),
            RawTaggedField::new(3, Vec::new()),
        ],
    };
    let first = encode(&response);
    let decoded = ApiVersionsResponseV3::decode(&mut &first[..]).unwrap();
    assert_eq!(decoded, response);
    assert_eq!(encode(&decoded), first);
}

#[test]
fn truncated_response_underflows() {
    let buf = encode(&fetch_request());
    let err = FetchRequestV0::decode(&mut &buf[..buf.len() - 3]).unwrap_err();
    assert!(matches!(err, WireError::Underflow { needed: 4, remaining: 1 }));
}

#[test]
fn decoded_responses_serialize_to_json() {
    let json = serde_json::to_value(FetchResponseV0 {
        responses: vec![FetchResponseTopicV0 {
            topic: "t".into(),
            partitions: Vec::new(),
        }],
    })
    .unwrap();
    assert_eq!(json["responses"][0]["topic"], "t");
}
