use wasm_memory::Memory;

fn main() {
    env_logger::init();
    let mut mem = Memory::new();
    mem.print();

    mem.resize(96);
    let greeting = mem.set_bytes(b"hello");
    let word = mem.set_bytes(&[0xde, 0xad, 0xbe, 0xef]);
    mem.set(64, 2, &[0x01, 0x02]);

    println!("greeting@{}={:?}", greeting, mem.get(greeting));
    println!("word@{}={:?}", word, mem.get(word));
    println!("last two={:?}", mem.get(-32i64 as u64));
    println!("len={} mem_size={}", mem.len(), mem.mem_size());
    mem.print();
}
